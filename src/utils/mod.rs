//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación,
//! JWT y generación de códigos.

pub mod codes;
pub mod errors;
pub mod jwt;
pub mod validation;
