//! Standard builder set
//!
//! One builder per concrete reference category: primitives, scalars,
//! arrays, enums, and a declared-type fallback. Priorities ascend in
//! that order, so the more specific builders always get the first look
//! and the general declared builder acts as the catch-all for declared
//! types nothing else claimed.

mod array;
mod declared;
mod enumeration;
mod primitive;
mod scalar;

pub use array::ArrayTypeBuilder;
pub use declared::GeneralDeclaredTypeBuilder;
pub use enumeration::EnumTypeBuilder;
pub use primitive::PrimitiveTypeBuilder;
pub use scalar::ScalarTypeBuilder;
