pub mod availability_server;
