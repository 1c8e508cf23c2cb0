pub mod accrual;
pub mod fees;
pub mod merkle;
pub mod transfer;
