use crate::{binding::BindingInfo, error::BindingError, path::Segment};
use std::{cell::RefCell, fmt, rc::Rc};

///
/// CallableBinding
///
/// A no-argument action reachable through a path. It has no value, only an
/// effect on the instance at the end of the path.
///

pub struct CallableBinding<R> {
    segment: Rc<Segment>,
    holder: Rc<RefCell<Option<R>>>,
    invoke: Rc<dyn Fn(&mut R) -> Result<(), BindingError>>,
}

impl<R> CallableBinding<R> {
    pub(crate) fn new(
        segment: Rc<Segment>,
        holder: Rc<RefCell<Option<R>>>,
        invoke: Rc<dyn Fn(&mut R) -> Result<(), BindingError>>,
    ) -> Self {
        Self {
            segment,
            holder,
            invoke,
        }
    }

    /// Run the action against the held root value.
    pub fn invoke(&self) -> Result<(), BindingError> {
        let mut holder = self.holder.borrow_mut();
        match holder.as_mut() {
            Some(root) => (self.invoke)(root),
            None => Err(BindingError::unbound(&self.segment.path())),
        }
    }

    /// Run the action against `root`, ignoring the held root value.
    pub fn invoke_with_root(&self, root: &mut R) -> Result<(), BindingError> {
        (self.invoke)(root)
    }
}

impl<R> BindingInfo for CallableBinding<R> {
    fn name(&self) -> &str {
        self.segment.name
    }

    fn type_name(&self) -> &'static str {
        self.segment.type_name
    }

    fn parent(&self) -> Option<&dyn BindingInfo> {
        self.segment.parent()
    }
}

impl<R> Clone for CallableBinding<R> {
    fn clone(&self) -> Self {
        Self {
            segment: Rc::clone(&self.segment),
            holder: Rc::clone(&self.holder),
            invoke: Rc::clone(&self.invoke),
        }
    }
}

impl<R> fmt::Debug for CallableBinding<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallableBinding")
            .field("path", &self.segment.path())
            .finish_non_exhaustive()
    }
}
