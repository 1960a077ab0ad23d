//! Core library modules for agenda.
//!
//! - **Domain**: task types, date conversion, input validation, service
//! - **Infrastructure**: configuration, data directory, error types
//! - **Presentation**: message catalogue and table rendering
//!
//! ## Usage
//!
//! ```rust,no_run
//! use agenda::db::tasks::Tasks;
//! use agenda::libs::service::TaskService;
//! use agenda::libs::validation::RegistrationRequest;
//!
//! let service = TaskService::new(Tasks::new().unwrap());
//! let task = service
//!     .register(&RegistrationRequest {
//!         name: "Report".into(),
//!         task_type: "work".into(),
//!         start: "01/01/2025 09:00".into(),
//!         end: "01/01/2025 10:00".into(),
//!         ..Default::default()
//!     })
//!     .unwrap();
//! println!("registered #{}", task.id);
//! ```

pub mod config;
pub mod data_storage;
pub mod dates;
pub mod error;
pub mod messages;
pub mod service;
pub mod task;
pub mod validation;
pub mod view;
