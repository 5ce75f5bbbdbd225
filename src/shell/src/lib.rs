pub mod command;
pub mod config;
pub mod panel;
pub mod transport;

pub use command::{PanelCommand, USAGE};
pub use config::ShellConfig;
pub use panel::Panel;
pub use transport::DeviceTransport;
