//! Type-erased callable boxes, one per capability grade.
//!
//! Each box owns a heap-allocated callable behind an untyped pointer and
//! carries exactly the function-pointer entries its grade can honor:
//!
//! | Box | Entries |
//! |-----|---------|
//! | [`FnOnceBox`] | `call_once`, `drop` |
//! | [`FnMutBox`]  | `call_once`, `call_mut`, `drop` |
//! | [`FnBox`]     | `call_once`, `call_mut`, `call`, `drop` |
//!
//! Construction accepts any callable of the same or a stronger grade, so a
//! repeatable-const closure can be stored in any of the three. Downgrading a
//! built box (`FnBox` → `FnMutBox` → `FnOnceBox`) is a `From` conversion
//! that forwards the pointers; upgrading does not exist.
//!
//! ```compile_fail
//! use relocore::callable::boxed::FnBox;
//!
//! let mut hits = 0u32;
//! // Mutates captured state: repeatable-mutating at best, not const-callable.
//! let counted = FnBox::<(), u32>::new(move || { hits += 1; hits });
//! ```

use core::marker::PhantomData;
use core::mem::ManuallyDrop;
use core::ptr::NonNull;

use alloc::boxed::Box;

use super::{Call, CallMut, CallOnce};

// =============================================================================
// Raw entry points
// =============================================================================
//
// Each thunk reinterprets the untyped storage pointer as the captured
// callable type it was monomorphized for.

unsafe fn call_once_raw<F, Args>(data: NonNull<()>, args: Args) -> F::Output
where
    F: CallOnce<Args>,
{
    // Moves the callable out and releases the allocation in one step.
    let callable = unsafe { *Box::from_raw(data.as_ptr() as *mut F) };
    callable.call_once(args)
}

unsafe fn call_mut_raw<F, Args>(data: NonNull<()>, args: Args) -> F::Output
where
    F: CallMut<Args>,
{
    unsafe { (*(data.as_ptr() as *mut F)).call_mut(args) }
}

unsafe fn call_raw<F, Args>(data: NonNull<()>, args: Args) -> F::Output
where
    F: Call<Args>,
{
    unsafe { (*(data.as_ptr() as *const F)).call(args) }
}

unsafe fn drop_raw<F>(data: NonNull<()>) {
    drop(unsafe { Box::from_raw(data.as_ptr() as *mut F) });
}

// =============================================================================
// FnOnceBox
// =============================================================================

/// A type-erased callable that may be invoked exactly once.
pub struct FnOnceBox<Args, R> {
    data: NonNull<()>,
    call_once: unsafe fn(NonNull<()>, Args) -> R,
    drop_fn: unsafe fn(NonNull<()>),
    _marker: PhantomData<fn(Args) -> R>,
}

impl<Args, R> FnOnceBox<Args, R> {
    /// Box a callable of the single-call grade or stronger.
    pub fn new<F>(callable: F) -> Self
    where
        F: CallOnce<Args, Output = R> + 'static,
    {
        FnOnceBox {
            data: NonNull::from(Box::leak(Box::new(callable))).cast(),
            call_once: call_once_raw::<F, Args>,
            drop_fn: drop_raw::<F>,
            _marker: PhantomData,
        }
    }

    /// Invoke the stored callable, consuming the box.
    pub fn call_once(self, args: Args) -> R {
        let this = ManuallyDrop::new(self);
        // The thunk takes ownership of both the callable and the allocation.
        unsafe { (this.call_once)(this.data, args) }
    }
}

impl<Args, R> Drop for FnOnceBox<Args, R> {
    fn drop(&mut self) {
        unsafe { (self.drop_fn)(self.data) }
    }
}

impl<Args, R> CallOnce<Args> for FnOnceBox<Args, R> {
    type Output = R;

    #[inline]
    fn call_once(self, args: Args) -> R {
        FnOnceBox::call_once(self, args)
    }
}

// =============================================================================
// FnMutBox
// =============================================================================

/// A type-erased callable invocable any number of times through a mutable
/// reference.
pub struct FnMutBox<Args, R> {
    data: NonNull<()>,
    call_once: unsafe fn(NonNull<()>, Args) -> R,
    call_mut: unsafe fn(NonNull<()>, Args) -> R,
    drop_fn: unsafe fn(NonNull<()>),
    _marker: PhantomData<fn(Args) -> R>,
}

impl<Args, R> FnMutBox<Args, R> {
    /// Box a callable of the repeatable-mutating grade or stronger.
    pub fn new<F>(callable: F) -> Self
    where
        F: CallMut<Args, Output = R> + 'static,
    {
        FnMutBox {
            data: NonNull::from(Box::leak(Box::new(callable))).cast(),
            call_once: call_once_raw::<F, Args>,
            call_mut: call_mut_raw::<F, Args>,
            drop_fn: drop_raw::<F>,
            _marker: PhantomData,
        }
    }

    /// Invoke the stored callable.
    pub fn call_mut(&mut self, args: Args) -> R {
        unsafe { (self.call_mut)(self.data, args) }
    }

    /// Invoke the stored callable a final time, consuming the box.
    pub fn call_once(self, args: Args) -> R {
        let this = ManuallyDrop::new(self);
        unsafe { (this.call_once)(this.data, args) }
    }
}

impl<Args, R> Drop for FnMutBox<Args, R> {
    fn drop(&mut self) {
        unsafe { (self.drop_fn)(self.data) }
    }
}

impl<Args, R> CallOnce<Args> for FnMutBox<Args, R> {
    type Output = R;

    #[inline]
    fn call_once(self, args: Args) -> R {
        FnMutBox::call_once(self, args)
    }
}

impl<Args, R> CallMut<Args> for FnMutBox<Args, R> {
    #[inline]
    fn call_mut(&mut self, args: Args) -> R {
        FnMutBox::call_mut(self, args)
    }
}

// =============================================================================
// FnBox
// =============================================================================

/// A type-erased callable invocable any number of times through a shared
/// reference.
pub struct FnBox<Args, R> {
    data: NonNull<()>,
    call_once: unsafe fn(NonNull<()>, Args) -> R,
    call_mut: unsafe fn(NonNull<()>, Args) -> R,
    call: unsafe fn(NonNull<()>, Args) -> R,
    drop_fn: unsafe fn(NonNull<()>),
    _marker: PhantomData<fn(Args) -> R>,
}

impl<Args, R> FnBox<Args, R> {
    /// Box a callable of the repeatable-const grade.
    pub fn new<F>(callable: F) -> Self
    where
        F: Call<Args, Output = R> + 'static,
    {
        FnBox {
            data: NonNull::from(Box::leak(Box::new(callable))).cast(),
            call_once: call_once_raw::<F, Args>,
            call_mut: call_mut_raw::<F, Args>,
            call: call_raw::<F, Args>,
            drop_fn: drop_raw::<F>,
            _marker: PhantomData,
        }
    }

    /// Invoke the stored callable.
    pub fn call(&self, args: Args) -> R {
        unsafe { (self.call)(self.data, args) }
    }

    /// Invoke the stored callable a final time, consuming the box.
    pub fn call_once(self, args: Args) -> R {
        let this = ManuallyDrop::new(self);
        unsafe { (this.call_once)(this.data, args) }
    }
}

impl<Args, R> Drop for FnBox<Args, R> {
    fn drop(&mut self) {
        unsafe { (self.drop_fn)(self.data) }
    }
}

impl<Args, R> CallOnce<Args> for FnBox<Args, R> {
    type Output = R;

    #[inline]
    fn call_once(self, args: Args) -> R {
        FnBox::call_once(self, args)
    }
}

impl<Args, R> CallMut<Args> for FnBox<Args, R> {
    #[inline]
    fn call_mut(&mut self, args: Args) -> R {
        unsafe { (self.call_mut)(self.data, args) }
    }
}

impl<Args, R> Call<Args> for FnBox<Args, R> {
    #[inline]
    fn call(&self, args: Args) -> R {
        FnBox::call(self, args)
    }
}

// =============================================================================
// Downgrade conversions
// =============================================================================
//
// Forward the already-built entry pointers; the storage moves untouched.

impl<Args, R> From<FnBox<Args, R>> for FnMutBox<Args, R> {
    fn from(stronger: FnBox<Args, R>) -> Self {
        let this = ManuallyDrop::new(stronger);
        FnMutBox {
            data: this.data,
            call_once: this.call_once,
            call_mut: this.call_mut,
            drop_fn: this.drop_fn,
            _marker: PhantomData,
        }
    }
}

impl<Args, R> From<FnBox<Args, R>> for FnOnceBox<Args, R> {
    fn from(stronger: FnBox<Args, R>) -> Self {
        let this = ManuallyDrop::new(stronger);
        FnOnceBox {
            data: this.data,
            call_once: this.call_once,
            drop_fn: this.drop_fn,
            _marker: PhantomData,
        }
    }
}

impl<Args, R> From<FnMutBox<Args, R>> for FnOnceBox<Args, R> {
    fn from(stronger: FnMutBox<Args, R>) -> Self {
        let this = ManuallyDrop::new(stronger);
        FnOnceBox {
            data: this.data,
            call_once: this.call_once,
            drop_fn: this.drop_fn,
            _marker: PhantomData,
        }
    }
}
