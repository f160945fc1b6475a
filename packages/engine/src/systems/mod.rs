pub mod environment;
pub mod gate;
pub mod rigid_body;
pub mod rigid_body_system;
pub mod settle;
pub mod visibility;
