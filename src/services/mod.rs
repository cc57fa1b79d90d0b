pub mod pricing_service;
