/// Browser adapters for opening the written viewer
mod system_browser;

pub use system_browser::SystemBrowserLauncher;
