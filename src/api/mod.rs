pub mod douyin;
pub mod generic;
pub mod tikhub;
