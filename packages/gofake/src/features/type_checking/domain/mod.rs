pub mod checked;

pub use checked::{
    CheckedFunc, CheckedInterface, CheckedPackage, CheckedSignature, CheckedType, CheckedVar,
    PackageRef,
};
