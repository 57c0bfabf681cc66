pub mod record;

pub use record::{NewShiftRecord, ShiftRecord};
