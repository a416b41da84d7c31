//! Rule-based operating-room scheduling for an orthopaedic ward.
//!
//! The engine turns free-text diagnoses into procedure labels, estimates
//! their duration, classifies each case into a priority tag with candidate
//! rooms, and places cases greedily into the morning and afternoon sessions
//! around cases that are already booked.
//!
//! ```
//! use surgiplan::{schedule, PendingCase};
//!
//! let pending = [PendingCase::new("p1", "Gãy cổ xương đùi bên trái", 68)];
//! let suggestions = schedule(&pending, &[]);
//! assert_eq!(suggestions[0].operating_room, "7");
//! assert_eq!(suggestions[0].surgery_time, "08:00");
//! ```

pub mod calendar;
pub mod classifier;
pub mod config;
pub mod duration;
pub mod error;
pub mod logging;
pub mod models;
pub mod procedure;
pub mod scheduler;
pub mod vocabulary;

pub use calendar::{find_free_slot, RoomOccupancy, SlotChoice};
pub use classifier::{classify, classify_case, Classification};
pub use config::Session;
pub use duration::estimate_duration;
pub use error::{Result, SurgiplanError};
pub use models::{
    ClassifiedCase, Interval, PendingCase, PriorityTag, ScheduleRequest, ScheduledCase,
    SurgerySuggestion,
};
pub use procedure::derive_procedure;
pub use scheduler::{assign_surgeon, schedule, ScheduleEngine, ScheduleReport};
