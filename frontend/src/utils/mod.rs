pub mod dialog;
pub mod storage;
