use chrono::Utc;
use uuid::Uuid;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 7;

/// Generate a record id: `<unix millis>-<7 random base36 chars>`.
pub fn generate_id() -> String {
    let millis = Utc::now().timestamp_millis();

    let mut n = Uuid::new_v4().as_u128();
    let mut suffix = String::with_capacity(SUFFIX_LEN);
    for _ in 0..SUFFIX_LEN {
        suffix.push(BASE36[(n % 36) as usize] as char);
        n /= 36;
    }

    format!("{millis}-{suffix}")
}
