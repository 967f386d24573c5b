use crate::utils::error::Result;

// The capability itself: any value answering `working` is eligible for
// dispatch, whatever its concrete type.
pub trait Working {
    fn working(&self) -> bool;
}

pub trait Reporter {
    fn report(&mut self, verdict: bool) -> Result<()>;
}
