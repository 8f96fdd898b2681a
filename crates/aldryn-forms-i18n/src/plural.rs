//! Plural form selection
//!
//! Maps a locale to the gettext plural rule used to pick an entry from a
//! catalog's list of plural forms.

/// Plural selection rule for a language family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralRule {
	/// One form only (ja, zh, ko, vi, th, id, ms, tr, fa, ka)
	Single,
	/// 0 and 1 are singular (fr, pt_BR)
	ZeroOneSingular,
	/// 1 is singular, everything else plural (en, de, nl, ...)
	OneSingular,
	/// Three forms keyed on the last two digits (ru, uk, be, sr, hr, bs)
	EastSlavic,
	/// Three forms, 1 singular then 2..4 (pl)
	Polish,
	/// Three forms, 1 / 2..4 / other (cs, sk)
	WestSlavic,
}

impl PluralRule {
	/// Selects the rule for a locale such as `fr`, `pt-BR` or `ru_RU`
	pub fn for_locale(locale: &str) -> Self {
		let lang = locale.split(['-', '_']).next().unwrap_or(locale);
		match lang {
			"ja" | "zh" | "ko" | "vi" | "th" | "id" | "ms" | "tr" | "fa" | "ka" => Self::Single,
			"fr" => Self::ZeroOneSingular,
			"pt" if locale.starts_with("pt_BR") || locale.starts_with("pt-BR") => {
				Self::ZeroOneSingular
			}
			"ru" | "uk" | "be" | "sr" | "hr" | "bs" => Self::EastSlavic,
			"pl" => Self::Polish,
			"cs" | "sk" => Self::WestSlavic,
			_ => Self::OneSingular,
		}
	}

	/// Index of the plural form to use for `count`
	pub fn index(self, count: usize) -> usize {
		let n10 = count % 10;
		let n100 = count % 100;
		let few = (2..=4).contains(&n10) && !(10..20).contains(&n100);
		match self {
			Self::Single => 0,
			Self::ZeroOneSingular => usize::from(count > 1),
			Self::OneSingular => usize::from(count != 1),
			Self::EastSlavic if n10 == 1 && n100 != 11 => 0,
			Self::EastSlavic if few => 1,
			Self::EastSlavic => 2,
			Self::Polish if count == 1 => 0,
			Self::Polish if few => 1,
			Self::Polish => 2,
			Self::WestSlavic => match count {
				1 => 0,
				2..=4 => 1,
				_ => 2,
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("en", 1, 0)]
	#[case("en", 0, 1)]
	#[case("de-DE", 2, 1)]
	#[case("fr", 0, 0)]
	#[case("fr", 2, 1)]
	#[case("pt_BR", 1, 0)]
	#[case("pt", 0, 1)]
	#[case("ja", 7, 0)]
	#[case("ru", 21, 0)]
	#[case("ru", 22, 1)]
	#[case("ru", 11, 2)]
	#[case("uk-UA", 5, 2)]
	#[case("pl", 1, 0)]
	#[case("pl", 22, 1)]
	#[case("pl", 12, 2)]
	#[case("cs", 3, 1)]
	#[case("sk", 0, 2)]
	fn test_plural_index(#[case] locale: &str, #[case] count: usize, #[case] expected: usize) {
		// Arrange
		let rule = PluralRule::for_locale(locale);

		// Act
		let index = rule.index(count);

		// Assert
		assert_eq!(index, expected, "{} with count={}", locale, count);
	}
}
