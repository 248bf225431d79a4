use crate::Record;
use core::fmt;

/// View that only re-renders when its props change.
///
/// [`should_recompute`](PureView::should_recompute) is the decision hook a host calls before
/// rendering again, defaulting to [`should_recompute`](crate::should_recompute)
/// (shallow inequality). Views can override it with their own policy.
///
/// ```
/// use memogate::prelude::*;
///
/// #[derive(Record)]
/// struct Heading {
///     text: &'static str,
///     counter: u32,
/// }
///
/// struct Title;
///
/// impl PureView for Title {
///     type Props = Heading;
///     type Output = String;
///
///     fn render(&self, props: &Heading) -> String {
///         format!("{}: {}", props.text, props.counter)
///     }
/// }
///
/// let mut node = PureNode::new(Title, Heading { text: "Count", counter: 0 });
/// assert!(!node.update(Heading { text: "Count", counter: 0 }));
/// assert!(node.update(Heading { text: "Count", counter: 1 }));
/// assert_eq!(node.output(), "Count: 1");
/// ```
pub trait PureView {
    /// Input of this view.
    type Props: Record;

    /// Rendered output of this view.
    type Output;

    /// Render the output for `props`.
    fn render(&self, props: &Self::Props) -> Self::Output;

    /// Returns `true` if this view should render again for `new`.
    fn should_recompute(&self, old: &Self::Props, new: &Self::Props) -> bool {
        crate::should_recompute(old, new)
    }
}

/// Mounted [`PureView`] holding its last rendered props and output.
pub struct PureNode<V: PureView> {
    view: V,
    props: V::Props,
    output: V::Output,
}

impl<V: PureView> PureNode<V> {
    /// Mount `view`, rendering it with the initial `props`.
    pub fn new(view: V, props: V::Props) -> Self {
        let output = view.render(&props);

        Self {
            view,
            props,
            output,
        }
    }

    /// Update this node with new `props`, returning `true` if it re-rendered.
    ///
    /// If the view's hook reports no change, the new props are dropped and
    /// the output of the last render is kept.
    /// [`props`](PureNode::props) always returns the props of the last render, so a custom
    /// hook is asked to compare against those rather than against skipped props.
    pub fn update(&mut self, props: V::Props) -> bool {
        if !self.view.should_recompute(&self.props, &props) {
            #[cfg(feature = "tracing")]
            tracing::trace!("Skip render: {}", crate::name::<V>());

            return false;
        }

        #[cfg(feature = "tracing")]
        tracing::trace!("Render: {}", crate::name::<V>());

        self.output = self.view.render(&props);
        self.props = props;
        true
    }

    /// Get the view of this node.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Get the props of the last render.
    pub fn props(&self) -> &V::Props {
        &self.props
    }

    /// Get the output of the last render.
    pub fn output(&self) -> &V::Output {
        &self.output
    }

    /// Unmount this node, returning its view and last output.
    pub fn into_inner(self) -> (V, V::Output) {
        (self.view, self.output)
    }
}

impl<V> fmt::Debug for PureNode<V>
where
    V: PureView + fmt::Debug,
    V::Props: fmt::Debug,
    V::Output: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PureNode")
            .field("view", &self.view)
            .field("props", &self.props)
            .field("output", &self.output)
            .finish()
    }
}
