//! Discovery of the packages a type refers to.
//!
//! The walk is a pre-order, left-to-right traversal. Every named type that belongs to a
//! package is reported, once per occurrence; callers deduplicate.

use moldable_lang_model::*;

use crate::collect::StructDescriptor;

pub fn collect(typ: &Type, visit: &mut impl FnMut(&PackageRef)) {
    match typ {
        Type::Basic(_) | Type::TypeParam(_) | Type::Struct(_) | Type::Unknown => {}
        Type::Array(Array { elem, .. })
        | Type::Slice(Slice { elem })
        | Type::Chan(Chan { elem, .. })
        | Type::Pointer(Pointer { elem }) => collect(elem, visit),
        Type::Map(Map { key, elem }) => {
            collect(key, visit);
            collect(elem, visit);
        }
        Type::Interface(Interface { embeddeds, methods }) => {
            embeddeds.iter().for_each(|embedded| collect(embedded, visit));
            methods.iter().for_each(|method| collect_signature(&method.signature, visit));
        }
        Type::Signature(signature) => collect_signature(signature, visit),
        Type::Named(Named { pkg, type_args, .. }) | Type::Alias(Named { pkg, type_args, .. }) => {
            if let Some(pkg) = pkg {
                visit(pkg);
            }
            type_args.iter().for_each(|arg| collect(arg, visit));
        }
        Type::Union(Union { terms }) => terms.iter().for_each(|term| collect(&term.typ, visit)),
    }
}

pub fn collect_signature(signature: &Signature, visit: &mut impl FnMut(&PackageRef)) {
    let Signature { params, results, .. } = signature;
    params.iter().chain(results).for_each(|var| collect(&var.typ, visit));
}

/// Walks the type parameter constraints of `descriptor`, then its method signatures.
pub fn collect_struct(descriptor: &StructDescriptor, visit: &mut impl FnMut(&PackageRef)) {
    descriptor.type_params.iter().for_each(|param| collect(&param.constraint, visit));
    descriptor.methods.iter().for_each(|method| collect_signature(&method.signature, visit));
}
