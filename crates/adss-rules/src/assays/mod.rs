pub mod elecsys;
pub mod innotest;
pub mod unscored;
