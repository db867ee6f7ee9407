pub mod labels;
pub mod patient;
pub mod result;
pub mod wire;
