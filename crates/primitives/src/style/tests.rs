use super::Color;

#[test]
fn parses_long_and_short_hex() {
	assert_eq!("#4f46e5".parse::<Color>(), Ok(Color::rgb(0x4f, 0x46, 0xe5)));
	assert_eq!("#fff".parse::<Color>(), Ok(Color::rgb(0xff, 0xff, 0xff)));
	assert_eq!("#05966980".parse::<Color>(), Ok(Color::rgb(0x05, 0x96, 0x69).with_alpha(0x80)));
}

#[test]
fn rejects_malformed_colors() {
	for bad in ["4f46e5", "#4f46e", "#zzzzzz", "indigo", "#", "#éé", "#+f+f+f", "#+0ff00ff"] {
		assert!(bad.parse::<Color>().is_err(), "{bad} should not parse");
	}
}

#[test]
fn background_tint_appends_alpha() {
	let color: Color = "#2563eb".parse().unwrap();
	assert_eq!(color.to_string(), "#2563eb");
	assert_eq!(color.background_tint().to_string(), "#2563eb10");
}
