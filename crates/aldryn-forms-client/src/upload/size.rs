//! Human-readable file sizes

const UNITS: [&str; 5] = ["B", "kB", "MB", "GB", "TB"];

/// Formats `size` in base-1024 units with up to two decimals
///
/// ```
/// use aldryn_forms_client::upload::human_file_size;
///
/// assert_eq!(human_file_size(0), "0 B");
/// assert_eq!(human_file_size(1536), "1.5 kB");
/// assert_eq!(human_file_size(5 * 1024 * 1024), "5 MB");
/// ```
pub fn human_file_size(size: u64) -> String {
	let mut exponent = 0;
	let mut scaled = size as f64;
	while scaled >= 1024.0 && exponent < UNITS.len() - 1 {
		scaled /= 1024.0;
		exponent += 1;
	}
	let text = format!("{:.2}", scaled);
	let text = text.trim_end_matches('0').trim_end_matches('.');
	format!("{} {}", text, UNITS[exponent])
}
