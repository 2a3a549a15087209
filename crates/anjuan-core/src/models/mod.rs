pub mod case;
pub mod interview;
pub mod person;
pub mod regulation;
