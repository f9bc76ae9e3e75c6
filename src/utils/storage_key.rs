use chrono::{DateTime, FixedOffset, Utc};
use uuid::Uuid;

/// Keys are stamped with Japan Standard Time. JST has no DST, so a fixed
/// shift is enough.
pub const KEY_UTC_OFFSET_SECS: i32 = 9 * 3600;

pub const UPLOAD_PREFIX: &str = "uploads";

/// `uploads/<YYYYMMDD>-<HHMMSS>-<random>.<ext>`
pub fn build_storage_key(
    now: DateTime<Utc>,
    random: &str,
    content_type: &str,
    file_name: Option<&str>,
) -> String {
    let local = now.with_timezone(&key_offset());
    format!(
        "{}/{}-{}.{}",
        UPLOAD_PREFIX,
        local.format("%Y%m%d-%H%M%S"),
        random,
        extension_for(content_type, file_name)
    )
}

fn key_offset() -> FixedOffset {
    FixedOffset::east_opt(KEY_UTC_OFFSET_SECS).expect("UTC+9 is a valid offset")
}

pub fn extension_for(content_type: &str, file_name: Option<&str>) -> String {
    let ext = match content_type {
        "image/jpeg" => "jpg",
        "image/png" => "png",
        "image/webp" => "webp",
        "image/gif" => "gif",
        _ => file_name
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext)
            .unwrap_or("bin"),
    };
    ext.to_string()
}

/// First hyphen-delimited group of a v4 UUID: 8 lowercase hex characters.
pub fn random_segment() -> String {
    let id = Uuid::new_v4().to_string();
    id.split('-').next().unwrap_or_default().to_string()
}

/// Joins the public base URL and a key, dropping one trailing slash from the base.
pub fn public_url(base_url: &str, key: &str) -> String {
    let base = base_url.strip_suffix('/').unwrap_or(base_url);
    format!("{}/{}", base, key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn key_uses_shifted_clock_and_mapped_extension() {
        let key = build_storage_key(at(2025, 3, 4, 5, 6, 7), "1a2b3c4d", "image/png", Some("ad.PNG"));
        assert_eq!(key, "uploads/20250304-140607-1a2b3c4d.png");
    }

    #[test]
    fn shift_rolls_over_to_next_day() {
        let key = build_storage_key(at(2024, 12, 31, 15, 0, 0), "deadbeef", "image/jpeg", None);
        assert_eq!(key, "uploads/20250101-000000-deadbeef.jpg");
    }

    #[test]
    fn key_offset_is_nine_hours_east() {
        assert_eq!(key_offset().local_minus_utc(), 9 * 3600);
        let key = build_storage_key(at(2025, 6, 30, 14, 59, 59), "00000000", "image/gif", None);
        assert_eq!(key, "uploads/20250630-235959-00000000.gif");
    }

    #[test]
    fn known_types_ignore_file_name() {
        assert_eq!(extension_for("image/jpeg", Some("photo.jpeg")), "jpg");
        assert_eq!(extension_for("image/webp", Some("banner")), "webp");
        assert_eq!(extension_for("image/gif", None), "gif");
    }

    #[test]
    fn unknown_types_fall_back_to_file_name() {
        assert_eq!(extension_for("application/octet-stream", Some("foo.bar.heic")), "heic");
        assert_eq!(extension_for("image/heic", Some("IMG_0001.HEIC")), "HEIC");
        assert_eq!(extension_for("application/octet-stream", Some("foo")), "bin");
        assert_eq!(extension_for("image/avif", None), "bin");
    }

    #[test]
    fn random_segment_is_eight_hex_chars() {
        let segment = random_segment();
        assert_eq!(segment.len(), 8);
        assert!(segment.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn public_url_strips_single_trailing_slash() {
        assert_eq!(
            public_url("https://img.example.com/", "uploads/a.png"),
            "https://img.example.com/uploads/a.png"
        );
        assert_eq!(
            public_url("https://img.example.com", "uploads/a.png"),
            "https://img.example.com/uploads/a.png"
        );
        assert_eq!(
            public_url("https://img.example.com//", "uploads/a.png"),
            "https://img.example.com//uploads/a.png"
        );
    }
}
