//! Tagged hash engines shared by the derivation steps.
pub(crate) mod hash;
