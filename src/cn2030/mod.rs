pub mod cn2030_client;
