/*!
Building nouns from Rust values.

The [IntoNoun] trait lets embedders and tests write nouns the way surface notation reads: tuples nest rightward, so `(1_u8, 2_u8, 3_u8)` builds `[1 [2 3]]`.
Bytes build single-byte atoms and byte slices build atoms verbatim.
*/

use super::Noun;

/// Conversion into a noun.
pub trait IntoNoun {
    fn into_noun(self) -> Noun;
}

impl IntoNoun for Noun {
    fn into_noun(self) -> Noun {
        self
    }
}

impl IntoNoun for u8 {
    fn into_noun(self) -> Noun {
        Noun::from_u8(self)
    }
}

impl<'b> IntoNoun for &'b [u8] {
    fn into_noun(self) -> Noun {
        Noun::atom(self)
    }
}

impl<A: IntoNoun, B: IntoNoun> IntoNoun for (A, B) {
    fn into_noun(self) -> Noun {
        Noun::cell(self.0.into_noun(), self.1.into_noun())
    }
}

impl<A: IntoNoun, B: IntoNoun, C: IntoNoun> IntoNoun for (A, B, C) {
    fn into_noun(self) -> Noun {
        Noun::cell(self.0.into_noun(), (self.1, self.2).into_noun())
    }
}

impl<A: IntoNoun, B: IntoNoun, C: IntoNoun, D: IntoNoun> IntoNoun for (A, B, C, D) {
    fn into_noun(self) -> Noun {
        Noun::cell(self.0.into_noun(), (self.1, self.2, self.3).into_noun())
    }
}

impl<A: IntoNoun, B: IntoNoun, C: IntoNoun, D: IntoNoun, E: IntoNoun> IntoNoun for (A, B, C, D, E) {
    fn into_noun(self) -> Noun {
        Noun::cell(self.0.into_noun(), (self.1, self.2, self.3, self.4).into_noun())
    }
}

impl<A: IntoNoun, B: IntoNoun, C: IntoNoun, D: IntoNoun, E: IntoNoun, F: IntoNoun> IntoNoun
    for (A, B, C, D, E, F)
{
    fn into_noun(self) -> Noun {
        Noun::cell(
            self.0.into_noun(),
            (self.1, self.2, self.3, self.4, self.5).into_noun(),
        )
    }
}

#[cfg(test)]
mod build_tests {
    use super::*;

    #[test]
    fn tuples_nest_rightward() {
        assert_eq!(
            (3_u8, 6_u8, 9_u8, (12_u8, 15_u8), 18_u8).into_noun(),
            (3_u8, (6_u8, (9_u8, ((12_u8, 15_u8), 18_u8)))).into_noun()
        );
    }

    #[test]
    fn slices_build_atoms() {
        assert_eq!(
            (&b"orange"[..]).into_noun().atom_bytes(),
            Some(&b"orange"[..])
        );
    }
}
