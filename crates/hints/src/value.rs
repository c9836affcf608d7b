use crate::def::HintDomain;
use crate::parse;


// Hint domains are fixed by SDL; only this crate implements them.
pub(crate) mod sealed {
	pub trait Sealed {}
	impl Sealed for bool {}
	impl Sealed for i64 {}
	impl Sealed for String {}
}

/// Rust type carrying the value of a hint.
pub trait HintType: sealed::Sealed + Sized {
	/// Domain this type encodes to.
	const DOMAIN: HintDomain;

	/// Encodes the value in SDL's wire format.
	fn encode(&self) -> String;

	/// Decodes a wire value, returning `None` if it lies outside the domain.
	fn decode(raw: &str) -> Option<Self>;
}

impl HintType for bool {
	const DOMAIN: HintDomain = HintDomain::Bool;

	fn encode(&self) -> String {
		let wire = if *self { "1" } else { "0" };
		wire.to_string()
	}

	fn decode(raw: &str) -> Option<Self> {
		parse::decode_bool(raw)
	}
}

impl HintType for i64 {
	const DOMAIN: HintDomain = HintDomain::Int;

	fn encode(&self) -> String {
		self.to_string()
	}

	fn decode(raw: &str) -> Option<Self> {
		parse::parse_int(raw).ok()
	}
}

impl HintType for String {
	const DOMAIN: HintDomain = HintDomain::String;

	fn encode(&self) -> String {
		self.clone()
	}

	fn decode(raw: &str) -> Option<Self> {
		Some(raw.to_string())
	}
}
