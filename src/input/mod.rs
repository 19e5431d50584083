pub mod poller;

pub use poller::LiveInput;
