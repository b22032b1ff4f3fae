//! Human-readable sizes for the photo preview.

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// Format a byte count for display.
///
/// Below 1 KiB the exact count is shown; above that, two decimals of KB or
/// MB (binary units).
///
/// ```ignore
/// assert_eq!(format_byte_size(1023), "1023 B");
/// assert_eq!(format_byte_size(1024), "1.00 KB");
/// ```
pub fn format_byte_size(bytes: u64) -> String {
    if bytes < KIB {
        format!("{} B", bytes)
    } else if bytes < MIB {
        format!("{:.2} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.2} MB", bytes as f64 / MIB as f64)
    }
}

/// Size line shown under a compressed photo preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeReport {
    byte_len: u64,
    max_size_bytes: u64,
    size_label: String,
}

impl SizeReport {
    pub fn new(byte_len: u64, max_size_bytes: u64) -> Self {
        Self {
            byte_len,
            max_size_bytes,
            size_label: format_byte_size(byte_len),
        }
    }

    pub fn byte_len(&self) -> u64 {
        self.byte_len
    }

    pub fn size_label(&self) -> &str {
        &self.size_label
    }

    pub fn within_budget(&self) -> bool {
        self.byte_len <= self.max_size_bytes
    }

    /// The OK or warning half of the preview line.
    pub fn status_message(&self) -> String {
        if self.within_budget() {
            "Image size OK".to_string()
        } else {
            format!(
                "Image is larger than {}",
                format_byte_size(self.max_size_bytes)
            )
        }
    }
}

impl std::fmt::Display for SizeReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Size: {} ({})", self.size_label, self.status_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bucket_boundaries() {
        assert_eq!(format_byte_size(0), "0 B");
        assert_eq!(format_byte_size(1023), "1023 B");
        assert_eq!(format_byte_size(1024), "1.00 KB");
        assert_eq!(format_byte_size(1_048_575), "1024.00 KB");
        assert_eq!(format_byte_size(1_048_576), "1.00 MB");
    }

    #[test]
    fn test_format_two_decimals() {
        assert_eq!(format_byte_size(1536), "1.50 KB");
        assert_eq!(format_byte_size(204_800), "200.00 KB");
        assert_eq!(format_byte_size(5 * 1024 * 1024 + 512 * 1024), "5.50 MB");
    }

    #[test]
    fn test_report_within_budget() {
        let report = SizeReport::new(150 * 1024, 200 * 1024);
        assert!(report.within_budget());
        assert_eq!(report.size_label(), "150.00 KB");
        assert_eq!(report.to_string(), "Size: 150.00 KB (Image size OK)");
    }

    #[test]
    fn test_report_at_budget_is_ok() {
        assert!(SizeReport::new(204_800, 204_800).within_budget());
    }

    #[test]
    fn test_report_over_budget_warns() {
        let report = SizeReport::new(210 * 1024, 200 * 1024);
        assert!(!report.within_budget());
        assert_eq!(report.status_message(), "Image is larger than 200.00 KB");
        assert_eq!(report.byte_len(), 215_040);
    }
}
