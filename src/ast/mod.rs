// Tue Jan 20 2026 - Alex

pub mod declaration;
pub mod field;
pub mod inherit;
pub mod template;
pub mod type_desc;
pub mod value;

pub use declaration::{Aggregate, Declaration, EnumValue, Enumeration, Namespace};
pub use field::Field;
pub use inherit::Inherit;
pub use template::TemplateParam;
pub use type_desc::TypeDescriptor;
pub use value::Value;
