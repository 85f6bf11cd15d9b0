//! Async callbacks passed from a parent container into list components.
//!
//! `leptos::Callback` is synchronous; components that need to await the
//! parent's work (and react to its `Result`) take an `AsyncCallback` instead.

use futures::future::{FutureExt, LocalBoxFuture};
use std::future::Future;
use std::rc::Rc;

pub struct AsyncCallback<T>(Rc<dyn Fn(T) -> LocalBoxFuture<'static, Result<(), String>>>);

impl<T> Clone for AsyncCallback<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: 'static> AsyncCallback<T> {
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn(T) -> Fut + 'static,
        Fut: Future<Output = Result<(), String>> + 'static,
    {
        Self(Rc::new(move |arg| f(arg).boxed_local()))
    }

    pub fn call(&self, arg: T) -> LocalBoxFuture<'static, Result<(), String>> {
        (self.0)(arg)
    }
}
