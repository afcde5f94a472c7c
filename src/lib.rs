//! Backend de apoio à decisão para o portfólio de imóveis corporativos:
//! catálogo de escritórios, projeção ficar x mudar, cenários what-if,
//! contratos de locação e indicadores do mapa.

pub mod common;
pub mod config;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
