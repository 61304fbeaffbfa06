pub mod products_api_client;
