mod application;
mod transport;
