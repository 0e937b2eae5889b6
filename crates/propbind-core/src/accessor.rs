use crate::error::BindingError;

///
/// Accessor
///
/// How one path step reaches its value inside the parent value.
///
/// `Field` steps are places: they can be borrowed mutably, so writes below
/// them happen in place. `Method` steps produce owned values; writes below
/// them read the value, modify it, then hand it back to the setter.
///

pub enum Accessor<P, T> {
    Field {
        get: fn(&P) -> Option<&T>,
        get_mut: fn(&mut P) -> Option<&mut T>,
        set: fn(&mut P, T),
    },
    Method {
        get: fn(&P) -> Option<T>,
        set: Option<fn(&mut P, T)>,
    },
}

impl<P, T> Accessor<P, T> {
    #[must_use]
    pub const fn field(
        get: fn(&P) -> Option<&T>,
        get_mut: fn(&mut P) -> Option<&mut T>,
        set: fn(&mut P, T),
    ) -> Self {
        Self::Field { get, get_mut, set }
    }

    /// Read/write method pair.
    #[must_use]
    pub const fn method(get: fn(&P) -> Option<T>, set: fn(&mut P, T)) -> Self {
        Self::Method {
            get,
            set: Some(set),
        }
    }

    /// Read-only method.
    #[must_use]
    pub const fn getter(get: fn(&P) -> Option<T>) -> Self {
        Self::Method { get, set: None }
    }

    #[must_use]
    pub const fn is_writable(&self) -> bool {
        match self {
            Self::Field { .. } => true,
            Self::Method { set, .. } => set.is_some(),
        }
    }

    pub(crate) fn visit(
        &self,
        parent: &P,
        sink: &mut dyn FnMut(Option<&T>) -> Result<(), BindingError>,
    ) -> Result<(), BindingError> {
        match self {
            Self::Field { get, .. } => sink(get(parent)),
            Self::Method { get, .. } => {
                let value = get(parent);
                sink(value.as_ref())
            }
        }
    }

    pub(crate) fn update(
        &self,
        parent: &mut P,
        path: &str,
        sink: &mut dyn FnMut(Option<&mut T>) -> Result<(), BindingError>,
    ) -> Result<(), BindingError> {
        match self {
            Self::Field { get_mut, .. } => sink(get_mut(parent)),
            Self::Method {
                get,
                set: Some(set),
            } => match get(&*parent) {
                Some(mut value) => {
                    sink(Some(&mut value))?;
                    set(parent, value);
                    Ok(())
                }
                None => sink(None),
            },
            Self::Method { set: None, .. } => Err(BindingError::read_only(path)),
        }
    }

    pub(crate) fn write(&self, parent: &mut P, path: &str, value: T) -> Result<(), BindingError> {
        match self {
            Self::Field { set, .. }
            | Self::Method {
                set: Some(set), ..
            } => {
                set(parent, value);
                Ok(())
            }
            Self::Method { set: None, .. } => Err(BindingError::read_only(path)),
        }
    }
}

// fn pointers are Copy regardless of P and T
impl<P, T> Clone for Accessor<P, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P, T> Copy for Accessor<P, T> {}
