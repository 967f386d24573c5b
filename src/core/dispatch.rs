use crate::core::Working;

// The consumer never asks what the value is, only whether it answers
// `working`. Shape mismatches fail at compile time in this rendering;
// `core::dynamic` keeps the call-time failure mode.
pub fn bike_is_working<T: Working>(unit: &T) -> bool {
    unit.working()
}

pub fn bike_is_working_dyn(unit: &dyn Working) -> bool {
    unit.working()
}
