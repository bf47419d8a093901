/// Maps a position code to its long name.
///
/// Codes are matched case-insensitively; unknown codes come back as given.
pub fn position_display_name(code: &str) -> String {
    let name = match code.trim().to_uppercase().as_str() {
        "PG" => "Point Guard",
        "SG" => "Shooting Guard",
        "SF" => "Small Forward",
        "PF" => "Power Forward",
        "G" => "Guard",
        "F" => "Forward",
        "C" => "Center",
        _ => return code.to_string(),
    };
    name.to_string()
}
