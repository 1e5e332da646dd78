//! Per-type field tables and the markers attached to their fields.

use core::marker::PhantomData;

use crate::error::{IntrospectError, IntrospectResult};
use crate::introspect::{Introspect, Reflected};
use crate::kind::FieldKind;
use crate::reflect::Reflect;
use crate::value::Value;

/// Declarative tag attached to a field.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Skipped by structural equality, hashing and ordering.
    ExcludeFromEquality,
    /// Never rendered.
    ExcludeFromString,
    /// Always rendered, whatever the field's kind.
    IncludeInString,
}

/// The set of markers carried by one field.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Markers {
    exclude_from_equality: bool,
    exclude_from_string: bool,
    include_in_string: bool,
}

impl Markers {
    pub fn with(mut self, marker: Marker) -> Self {
        match marker {
            Marker::ExcludeFromEquality => self.exclude_from_equality = true,
            Marker::ExcludeFromString => self.exclude_from_string = true,
            Marker::IncludeInString => self.include_in_string = true,
        }
        self
    }

    pub fn has(self, marker: Marker) -> bool {
        match marker {
            Marker::ExcludeFromEquality => self.exclude_from_equality,
            Marker::ExcludeFromString => self.exclude_from_string,
            Marker::IncludeInString => self.include_in_string,
        }
    }
}

trait ReadField<T>: Send + Sync {
    fn read<'a>(&self, target: &'a T) -> Value<'a>;
}

struct Projection<F, V: ?Sized> {
    get: F,
    _value: PhantomData<fn() -> *const V>,
}

impl<T, V, F> ReadField<T> for Projection<F, V>
where
    F: for<'a> Fn(&'a T) -> &'a V + Send + Sync,
    V: Reflect + ?Sized + 'static,
{
    fn read<'a>(&self, target: &'a T) -> Value<'a> {
        (self.get)(target).reflect()
    }
}

trait Upcast<T>: Send + Sync {
    fn upcast<'a>(&self, target: &'a T) -> &'a dyn Reflected;
}

struct BaseProjection<F, B> {
    get: F,
    _base: PhantomData<fn() -> B>,
}

impl<T, B, F> Upcast<T> for BaseProjection<F, B>
where
    F: for<'a> Fn(&'a T) -> &'a B + Send + Sync,
    B: Introspect,
{
    fn upcast<'a>(&self, target: &'a T) -> &'a dyn Reflected {
        (self.get)(target)
    }
}

enum Access<T> {
    Read(Box<dyn ReadField<T>>),
    Restricted,
}

struct Field<T> {
    name: &'static str,
    kind: FieldKind,
    markers: Markers,
    access: Access<T>,
}

/// Static metadata of one declared field.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FieldInfo {
    pub name: &'static str,
    pub kind: FieldKind,
    pub markers: Markers,
    /// The field's value cannot be read.
    pub restricted: bool,
}

/// One declared field of a live object, together with its read-out.
#[derive(Debug, Clone)]
pub struct FieldSlot<'a> {
    owner: &'static str,
    name: &'static str,
    kind: FieldKind,
    markers: Markers,
    value: Option<Value<'a>>,
}

impl<'a> FieldSlot<'a> {
    pub fn owner(&self) -> &'static str {
        self.owner
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn markers(&self) -> Markers {
        self.markers
    }

    pub fn has(&self, marker: Marker) -> bool {
        self.markers.has(marker)
    }

    /// The field's value, or `AccessDenied` for a restricted field.
    pub fn value(&self) -> IntrospectResult<&Value<'a>> {
        self.value
            .as_ref()
            .ok_or_else(|| IntrospectError::access_denied(self.owner, self.name))
    }
}

/// Field table of `T`: its own fields, in declaration order, plus an optional
/// link to the descriptor of the base type `T` embeds.
pub struct Descriptor<T: 'static> {
    type_name: &'static str,
    fields: Vec<Field<T>>,
    base: Option<Box<dyn Upcast<T>>>,
}

impl<T: 'static> Descriptor<T> {
    /// Start describing `T`. Markers are attached by field name and resolved
    /// in [`DescriptorBuilder::build`].
    pub fn describe(type_name: &'static str) -> DescriptorBuilder<T> {
        DescriptorBuilder {
            type_name,
            fields: Vec::new(),
            base: None,
            marks: Vec::new(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldInfo> + '_ {
        self.fields.iter().map(|field| FieldInfo {
            name: field.name,
            kind: field.kind,
            markers: field.markers,
            restricted: matches!(field.access, Access::Restricted),
        })
    }

    pub fn field(&self, name: &str) -> Option<FieldInfo> {
        self.fields().find(|field| field.name == name)
    }

    pub fn has_base(&self) -> bool {
        self.base.is_some()
    }

    pub(crate) fn slots<'a>(&self, target: &'a T) -> Vec<FieldSlot<'a>> {
        self.fields
            .iter()
            .map(|field| FieldSlot {
                owner: self.type_name,
                name: field.name,
                kind: field.kind,
                markers: field.markers,
                value: match &field.access {
                    Access::Read(reader) => Some(reader.read(target)),
                    Access::Restricted => None,
                },
            })
            .collect()
    }

    pub(crate) fn base_of<'a>(&self, target: &'a T) -> Option<&'a dyn Reflected> {
        self.base.as_ref().map(|base| base.upcast(target))
    }
}

impl<T: 'static> core::fmt::Debug for Descriptor<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Descriptor")
            .field("type_name", &self.type_name)
            .field("fields", &self.fields().collect::<Vec<_>>())
            .field("has_base", &self.has_base())
            .finish()
    }
}

/// Fluent construction of a [`Descriptor`].
pub struct DescriptorBuilder<T: 'static> {
    type_name: &'static str,
    fields: Vec<Field<T>>,
    base: Option<Box<dyn Upcast<T>>>,
    marks: Vec<(&'static str, Marker)>,
}

impl<T: 'static> DescriptorBuilder<T> {
    /// Declare a readable field. Its kind comes from the field's Rust type.
    pub fn field<V, F>(mut self, name: &'static str, get: F) -> Self
    where
        F: for<'a> Fn(&'a T) -> &'a V + Send + Sync + 'static,
        V: Reflect + ?Sized + 'static,
    {
        self.fields.push(Field {
            name,
            kind: V::field_kind(),
            markers: Markers::default(),
            access: Access::Read(Box::new(Projection {
                get,
                _value: PhantomData,
            })),
        });
        self
    }

    /// Declare a field whose value may not be read. Any operation that needs
    /// it fails with `AccessDenied`.
    pub fn restricted<V: Reflect + ?Sized>(mut self, name: &'static str) -> Self {
        self.fields.push(Field {
            name,
            kind: V::field_kind(),
            markers: Markers::default(),
            access: Access::Restricted,
        });
        self
    }

    /// Link the embedded base object whose fields `T` inherits.
    pub fn extends<B, F>(mut self, get: F) -> Self
    where
        B: Introspect,
        F: for<'a> Fn(&'a T) -> &'a B + Send + Sync + 'static,
    {
        self.base = Some(Box::new(BaseProjection {
            get,
            _base: PhantomData,
        }));
        self
    }

    pub fn mark(mut self, name: &'static str, marker: Marker) -> Self {
        self.marks.push((name, marker));
        self
    }

    pub fn exclude_from_equality(self, name: &'static str) -> Self {
        self.mark(name, Marker::ExcludeFromEquality)
    }

    pub fn exclude_from_string(self, name: &'static str) -> Self {
        self.mark(name, Marker::ExcludeFromString)
    }

    pub fn include_in_string(self, name: &'static str) -> Self {
        self.mark(name, Marker::IncludeInString)
    }

    pub fn build(mut self) -> Descriptor<T> {
        for (name, marker) in self.marks.drain(..) {
            let mut matched = false;
            for field in self.fields.iter_mut().filter(|field| field.name == name) {
                field.markers = field.markers.with(marker);
                matched = true;
            }
            if !matched {
                tracing::warn!(
                    type_name = self.type_name,
                    field = name,
                    ?marker,
                    "marker names an undeclared field; ignored"
                );
            }
        }

        tracing::debug!(
            type_name = self.type_name,
            fields = self.fields.len(),
            has_base = self.base.is_some(),
            "registered descriptor"
        );

        Descriptor {
            type_name: self.type_name,
            fields: self.fields,
            base: self.base,
        }
    }
}
