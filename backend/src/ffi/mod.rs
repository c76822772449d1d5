pub mod clfft;
