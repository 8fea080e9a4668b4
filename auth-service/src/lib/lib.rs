pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::session;
pub use outbound::repositories;

pub mod proto {
    pub mod auth {
        tonic::include_proto!("auth");
    }

    pub mod directory {
        tonic::include_proto!("directory");
    }
}
