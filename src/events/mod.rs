pub mod pointer;
pub mod subscription;
