//! Caregiver vetting lifecycle.
//!
//! - `status` - Application status state machine
//! - `profile` - CaregiverProfile aggregate

mod profile;
mod status;

pub use profile::CaregiverProfile;
pub use status::ApplicationStatus;
