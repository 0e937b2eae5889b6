use crate::{
    accessor::Accessor,
    binding::{Binding, BindingInfo, BindingRoot},
    callable::CallableBinding,
    error::BindingError,
};
use std::{any::type_name, cell::RefCell, fmt, rc::Rc};

// Continuations handed down the path. Each step calls its sink exactly once.
type VisitFn<R, T> = dyn Fn(&R, &mut dyn FnMut(Option<&T>) -> Result<(), BindingError>) -> Result<(), BindingError>;
type UpdateFn<R, T> =
    dyn Fn(&mut R, &mut dyn FnMut(Option<&mut T>) -> Result<(), BindingError>) -> Result<(), BindingError>;
type WriteFn<R, T> = dyn Fn(&mut R, T) -> Result<(), BindingError>;

fn visitor<R, T, F>(f: F) -> Rc<VisitFn<R, T>>
where
    F: Fn(&R, &mut dyn FnMut(Option<&T>) -> Result<(), BindingError>) -> Result<(), BindingError>
        + 'static,
{
    Rc::new(f)
}

fn updater<R, T, F>(f: F) -> Rc<UpdateFn<R, T>>
where
    F: Fn(&mut R, &mut dyn FnMut(Option<&mut T>) -> Result<(), BindingError>) -> Result<(), BindingError>
        + 'static,
{
    Rc::new(f)
}

fn writer<R, T, F>(f: F) -> Rc<WriteFn<R, T>>
where
    F: Fn(&mut R, T) -> Result<(), BindingError> + 'static,
{
    Rc::new(f)
}

const fn identity<T>(value: T) -> T {
    value
}

///
/// Segment
///
/// Identity of one step, shared by every binding derived from it.
///

pub(crate) struct Segment {
    pub(crate) name: &'static str,
    pub(crate) type_name: &'static str,
    pub(crate) parent: Option<Rc<Segment>>,
}

impl BindingInfo for Segment {
    fn name(&self) -> &str {
        self.name
    }

    fn type_name(&self) -> &'static str {
        self.type_name
    }

    fn parent(&self) -> Option<&dyn BindingInfo> {
        self.parent.as_deref().map(|segment| segment as &dyn BindingInfo)
    }
}

///
/// PathBinding
///
/// A binding for the leaf `T` of a path that starts at root type `R`.
///
/// Standalone bindings (`new`, `with_value`) hold their own value and are
/// their own root. Path-attached bindings are produced by [`PathBinding::then`]
/// and share the root value holder of the binding they were derived from.
///

pub struct PathBinding<R, T> {
    segment: Rc<Segment>,
    holder: Rc<RefCell<Option<R>>>,
    seed: Option<fn(T) -> R>,
    visit: Rc<VisitFn<R, T>>,
    update: Rc<UpdateFn<R, T>>,
    write: Rc<WriteFn<R, T>>,
}

///
/// ValueBinding
///
/// A standalone binding: a typed value holder whose root is itself.
///

pub type ValueBinding<T> = PathBinding<T, T>;

impl<T: 'static> PathBinding<T, T> {
    #[must_use]
    pub fn new() -> Self {
        Self::standalone(None)
    }

    #[must_use]
    pub fn with_value(value: T) -> Self {
        Self::standalone(Some(value))
    }

    fn standalone(value: Option<T>) -> Self {
        Self {
            segment: Rc::new(Segment {
                name: "",
                type_name: type_name::<T>(),
                parent: None,
            }),
            holder: Rc::new(RefCell::new(value)),
            seed: Some(identity::<T> as fn(T) -> T),
            visit: visitor(|root: &T, sink| sink(Some(root))),
            update: updater(|root: &mut T, sink| sink(Some(root))),
            write: writer(|root: &mut T, value: T| {
                *root = value;
                Ok(())
            }),
        }
    }
}

impl<T: 'static> Default for PathBinding<T, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: 'static, T: 'static> PathBinding<R, T> {
    /// Extend the path by one step.
    #[must_use]
    pub fn then<U: 'static>(
        &self,
        name: &'static str,
        type_name: &'static str,
        accessor: Accessor<T, U>,
    ) -> PathBinding<R, U> {
        let segment = Rc::new(Segment {
            name,
            type_name,
            parent: Some(Rc::clone(&self.segment)),
        });
        let here: Rc<str> = Rc::from(segment.path());
        let above: Rc<str> = Rc::from(self.segment.path());

        let visit = {
            let parent = Rc::clone(&self.visit);
            let above = Rc::clone(&above);

            visitor(move |root: &R, sink| {
                parent(root, &mut |value: Option<&T>| match value {
                    Some(value) => accessor.visit(value, &mut *sink),
                    None => Err(BindingError::absent(&above)),
                })
            })
        };

        let update = {
            let parent = Rc::clone(&self.update);
            let above = Rc::clone(&above);
            let here = Rc::clone(&here);

            updater(move |root: &mut R, sink| {
                parent(root, &mut |value: Option<&mut T>| match value {
                    Some(value) => accessor.update(value, &here, &mut *sink),
                    None => Err(BindingError::absent(&above)),
                })
            })
        };

        let write = {
            let parent = Rc::clone(&self.update);

            writer(move |root: &mut R, value: U| {
                let mut value = Some(value);
                parent(root, &mut |target: Option<&mut T>| match (target, value.take()) {
                    (Some(target), Some(value)) => accessor.write(target, &here, value),
                    (None, _) => Err(BindingError::absent(&above)),
                    (Some(_), None) => Ok(()),
                })
            })
        };

        PathBinding {
            segment,
            holder: Rc::clone(&self.holder),
            seed: None,
            visit,
            update,
            write,
        }
    }

    /// Bind a no-argument action on the current leaf.
    #[must_use]
    pub fn callable(&self, name: &'static str, call: fn(&mut T)) -> CallableBinding<R> {
        let segment = Rc::new(Segment {
            name,
            type_name: "()",
            parent: Some(Rc::clone(&self.segment)),
        });
        let above: Rc<str> = Rc::from(self.segment.path());
        let parent = Rc::clone(&self.update);

        let invoke = move |root: &mut R| {
            parent(root, &mut |target: Option<&mut T>| match target {
                Some(target) => {
                    call(target);
                    Ok(())
                }
                None => Err(BindingError::absent(&above)),
            })
        };

        CallableBinding::new(segment, Rc::clone(&self.holder), Rc::new(invoke))
    }

    /// Evaluate the path against `root`, ignoring the held root value.
    pub fn get_with_root(&self, root: &R) -> Result<Option<T>, BindingError>
    where
        T: Clone,
    {
        let mut out = None;
        (self.visit)(root, &mut |value: Option<&T>| {
            out = value.cloned();
            Ok(())
        })?;

        Ok(out)
    }

    /// Evaluate the path against `root`; any absent prefix yields `None`.
    #[must_use]
    pub fn get_safely_with_root(&self, root: &R) -> Option<T>
    where
        T: Clone,
    {
        self.get_with_root(root).ok().flatten()
    }

    pub fn set_with_root(&self, root: &mut R, value: T) -> Result<(), BindingError> {
        (self.write)(root, value)
    }

    /// Evaluate the path against the held root value.
    pub fn get(&self) -> Result<Option<T>, BindingError>
    where
        T: Clone,
    {
        let holder = self.holder.borrow();
        match holder.as_ref() {
            Some(root) => self.get_with_root(root),
            None if self.is_standalone() => Ok(None),
            None => Err(BindingError::unbound(&self.segment.path())),
        }
    }

    /// Write through the held root value. A standalone binding with no value
    /// yet takes `value` as its root.
    pub fn set(&self, value: T) -> Result<(), BindingError> {
        let mut holder = self.holder.borrow_mut();
        if let Some(root) = holder.as_mut() {
            return (self.write)(root, value);
        }

        match self.seed {
            Some(seed) => {
                *holder = Some(seed(value));
                Ok(())
            }
            None => Err(BindingError::unbound(&self.segment.path())),
        }
    }

    /// Whether this binding is a standalone value holder.
    #[must_use]
    pub fn is_standalone(&self) -> bool {
        self.segment.parent.is_none()
    }

    /// The binding one level up the path, or this binding at the root.
    #[must_use]
    pub fn root_binding(&self) -> &dyn BindingInfo {
        match self.segment.parent.as_deref() {
            Some(parent) => parent as &dyn BindingInfo,
            None => self as &dyn BindingInfo,
        }
    }
}

impl<R, T> BindingInfo for PathBinding<R, T> {
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

impl<R: 'static, T: Clone + 'static> Binding<T> for PathBinding<R, T> {
    fn get(&self) -> Result<Option<T>, BindingError> {
        Self::get(self)
    }

    fn set(&self, value: T) -> Result<(), BindingError> {
        Self::set(self, value)
    }

    fn root_binding(&self) -> &dyn BindingInfo {
        Self::root_binding(self)
    }
}

impl<R: 'static, T: Clone + 'static> BindingRoot<R, T> for PathBinding<R, T> {
    fn get_with_root(&self, root: &R) -> Result<Option<T>, BindingError> {
        Self::get_with_root(self, root)
    }

    fn get_safely_with_root(&self, root: &R) -> Option<T> {
        Self::get_safely_with_root(self, root)
    }

    fn set_with_root(&self, root: &mut R, value: T) -> Result<(), BindingError> {
        Self::set_with_root(self, root, value)
    }
}

impl<R, T> Clone for PathBinding<R, T> {
    fn clone(&self) -> Self {
        Self {
            segment: Rc::clone(&self.segment),
            holder: Rc::clone(&self.holder),
            seed: self.seed,
            visit: Rc::clone(&self.visit),
            update: Rc::clone(&self.update),
            write: Rc::clone(&self.write),
        }
    }
}

impl<R, T> fmt::Debug for PathBinding<R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathBinding")
            .field("path", &self.segment.path())
            .field("type_name", &self.segment.type_name)
            .finish_non_exhaustive()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Clone, Debug, Default, PartialEq)]
    struct City {
        name: String,
    }

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Address {
        city: Option<City>,
    }

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Customer {
        address: Option<Address>,
        visits: u32,
    }

    impl Customer {
        const fn visits(&self) -> u32 {
            self.visits
        }

        fn set_visits(&mut self, visits: u32) {
            self.visits = visits;
        }

        fn reset(&mut self) {
            self.visits = 0;
        }
    }

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Account {
        owner: Customer,
    }

    impl Account {
        fn owner(&self) -> Customer {
            self.owner.clone()
        }

        fn set_owner(&mut self, owner: Customer) {
            self.owner = owner;
        }
    }

    fn x() -> PathBinding<Point, i32> {
        PathBinding::new().then(
            "x",
            "i32",
            Accessor::<Point, i32>::field(|p| Some(&p.x), |p| Some(&mut p.x), |p, v| p.x = v),
        )
    }

    fn city_name() -> PathBinding<Customer, String> {
        PathBinding::<Customer, Customer>::new()
            .then(
                "address",
                "Address",
                Accessor::<Customer, Address>::field(
                    |c| c.address.as_ref(),
                    |c| c.address.as_mut(),
                    |c, v| c.address = Some(v),
                ),
            )
            .then(
                "city",
                "City",
                Accessor::<Address, City>::field(
                    |a| a.city.as_ref(),
                    |a| a.city.as_mut(),
                    |a, v| a.city = Some(v),
                ),
            )
            .then(
                "name",
                "String",
                Accessor::<City, String>::field(
                    |c| Some(&c.name),
                    |c| Some(&mut c.name),
                    |c, v| c.name = v,
                ),
            )
    }

    #[test]
    fn field_round_trip_against_explicit_root() {
        let binding = x();
        let mut point = Point { x: 3, y: 4 };

        assert_eq!(binding.get_with_root(&point), Ok(Some(3)));
        binding.set_with_root(&mut point, 9).unwrap();
        assert_eq!(binding.get_with_root(&point), Ok(Some(9)));
        assert_eq!(point.y, 4);
    }

    #[test]
    fn safe_get_degrades_on_absent_prefix() {
        let binding = city_name();
        let customer = Customer::default();

        assert_eq!(binding.get_safely_with_root(&customer), None);
        assert_eq!(
            binding.get_with_root(&customer),
            Err(BindingError::Absent {
                path: "address".to_string()
            })
        );

        let half = Customer {
            address: Some(Address { city: None }),
            visits: 0,
        };
        assert_eq!(binding.get_safely_with_root(&half), None);
        assert_eq!(
            binding.get_with_root(&half).unwrap_err().path(),
            "address.city"
        );
    }

    #[test]
    fn deep_write_goes_through_places() {
        let binding = city_name();
        let mut customer = Customer {
            address: Some(Address {
                city: Some(City {
                    name: "Oslo".to_string(),
                }),
            }),
            visits: 0,
        };

        binding
            .set_with_root(&mut customer, "Bergen".to_string())
            .unwrap();
        assert_eq!(
            binding.get_with_root(&customer),
            Ok(Some("Bergen".to_string()))
        );
    }

    #[test]
    fn deep_write_fails_on_absent_prefix() {
        let binding = city_name();
        let mut customer = Customer::default();

        let err = binding
            .set_with_root(&mut customer, "Bergen".to_string())
            .unwrap_err();
        assert_eq!(err.path(), "address");
        assert_eq!(customer, Customer::default());
    }

    #[test]
    fn method_steps_write_back_through_setters() {
        let visits = PathBinding::<Account, Account>::new()
            .then(
                "owner",
                "Customer",
                Accessor::<Account, Customer>::method(|a| Some(a.owner()), |a, v| a.set_owner(v)),
            )
            .then(
                "visits",
                "u32",
                Accessor::<Customer, u32>::method(|c| Some(c.visits()), |c, v| c.set_visits(v)),
            );
        let mut account = Account::default();

        visits.set_with_root(&mut account, 7).unwrap();
        assert_eq!(visits.get_with_root(&account), Ok(Some(7)));
        assert_eq!(account.owner.visits, 7);
    }

    #[test]
    fn read_only_steps_refuse_writes() {
        let visits = PathBinding::<Customer, Customer>::new().then(
            "visits",
            "u32",
            Accessor::<Customer, u32>::getter(|c| Some(c.visits())),
        );
        let mut customer = Customer::default();

        assert_eq!(
            visits.set_with_root(&mut customer, 2),
            Err(BindingError::ReadOnly {
                path: "visits".to_string()
            })
        );
        assert_eq!(visits.get_with_root(&customer), Ok(Some(0)));
    }

    #[test]
    fn standalone_binding_holds_its_own_value() {
        let root = ValueBinding::<Point>::new();
        assert!(root.is_standalone());
        assert_eq!(root.get(), Ok(None));
        assert_eq!(root.name(), "");
        assert_eq!(root.root_binding().name(), "");

        root.set(Point { x: 1, y: 2 }).unwrap();
        assert_eq!(root.get(), Ok(Some(Point { x: 1, y: 2 })));
    }

    #[test]
    fn attached_binding_uses_the_shared_root_value() {
        let root = PathBinding::with_value(Point { x: 3, y: 4 });
        let binding = root.then(
            "x",
            "i32",
            Accessor::<Point, i32>::field(|p| Some(&p.x), |p| Some(&mut p.x), |p, v| p.x = v),
        );

        assert!(!binding.is_standalone());
        assert_eq!(binding.get(), Ok(Some(3)));
        binding.set(5).unwrap();
        assert_eq!(root.get(), Ok(Some(Point { x: 5, y: 4 })));
    }

    #[test]
    fn attached_binding_without_root_is_unbound() {
        let binding = x();

        assert_eq!(
            binding.get(),
            Err(BindingError::Unbound {
                path: "x".to_string()
            })
        );
        assert!(binding.set(1).is_err());
    }

    #[test]
    fn identity_walks_up_the_path() {
        let binding = city_name();

        assert_eq!(binding.name(), "name");
        assert_eq!(binding.type_name(), "String");
        assert_eq!(binding.path(), "address.city.name");
        assert_eq!(binding.root_binding().name(), "city");
        assert_eq!(binding.root_binding().path(), "address.city");
        assert!(binding.parent().and_then(|p| p.parent()).is_some());
    }

    #[test]
    fn callable_runs_against_explicit_root() {
        let reset = PathBinding::<Customer, Customer>::new().callable("reset", |c| c.reset());
        let mut customer = Customer {
            address: None,
            visits: 4,
        };

        reset.invoke_with_root(&mut customer).unwrap();
        assert_eq!(customer.visits, 0);
        assert_eq!(reset.name(), "reset");
        assert!(reset.invoke().is_err());
    }
}
