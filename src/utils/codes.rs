//! Generación de códigos de reserva
//!
//! Códigos legibles para humanos, la unicidad real la garantiza el
//! constraint UNIQUE de la base de datos.

use rand::Rng;

const CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const CODE_LENGTH: usize = 8;

/// Generar un código de reserva con formato `RES-XXXXXXXX`
pub fn generate_reservation_code() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..CODE_LENGTH)
        .map(|_| {
            let idx = rng.gen_range(0..CODE_CHARSET.len());
            CODE_CHARSET[idx] as char
        })
        .collect();

    format!("RES-{}", suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_format() {
        let code = generate_reservation_code();
        assert!(code.starts_with("RES-"));
        assert_eq!(code.len(), 4 + CODE_LENGTH);
        assert!(code[4..]
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_codes_vary() {
        let codes: std::collections::HashSet<String> =
            (0..50).map(|_| generate_reservation_code()).collect();
        assert!(codes.len() > 1);
    }
}
