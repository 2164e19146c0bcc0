//! Best-effort repair of partially typed IPv4 addresses, as entered in
//! search boxes and discovery forms.

const MIN_OCTETS: usize = 4;

/// Completes `partial` into a dotted-quad, replacing missing or invalid
/// octets with `0`.
///
/// Everything except digits and dots is dropped first. Octets that are not
/// strictly between 0 and 255 become `0`; valid ones keep their original
/// text. Inputs with more than four components keep the extras.
///
/// ```
/// use iputil_core::completion::complete;
/// assert_eq!(complete("10.175.X"), "10.175.0.0");
/// ```
pub fn complete(partial: &str) -> String {
    let stripped: String = partial
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut octets: Vec<&str> = stripped.split('.').collect();
    if octets.len() < MIN_OCTETS {
        octets.resize(MIN_OCTETS, "0");
    }

    octets
        .into_iter()
        .map(|octet| match octet.parse::<u32>() {
            Ok(value) if value > 0 && value < 255 => octet,
            _ => "0",
        })
        .collect::<Vec<&str>>()
        .join(".")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
