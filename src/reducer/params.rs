//! parameters of a reduction : axis and iteration style

use serde::{Deserialize, Serialize};

/// Axis along which statistics are computed. Column gives one value per column.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    #[default]
    Column,
    Row,
}

impl Axis {
    pub fn is_by_row(&self) -> bool {
        matches!(self, Axis::Row)
    }

    // Matrices are (nrow, ncol). Output values are indexed along this ndarray axis.
    pub(crate) fn output_axis(&self) -> ndarray::Axis {
        match self {
            Axis::Column => ndarray::Axis(1),
            Axis::Row => ndarray::Axis(0),
        }
    }

    // the ndarray axis a lane runs along
    pub(crate) fn lane_axis(&self) -> ndarray::Axis {
        match self {
            Axis::Column => ndarray::Axis(0),
            Axis::Row => ndarray::Axis(1),
        }
    }
}

/// by_row flag to Axis
impl From<bool> for Axis {
    fn from(by_row: bool) -> Self {
        if by_row { Axis::Row } else { Axis::Column }
    }
}

/// How lanes are iterated. All styles give the same result.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IterStyle {
    /// a lane function applied to each lane index
    Function,
    /// explicit loop writing into a pre-sized vector
    Loop,
    /// ndarray map_axis
    #[default]
    Map,
    /// rayon parallel iteration over lanes
    Parallel,
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReducerParams {
    axis: Axis,
    style: IterStyle,
}

impl ReducerParams {
    pub fn new(axis: Axis, style: IterStyle) -> Self {
        ReducerParams { axis, style }
    }

    pub fn get_axis(&self) -> Axis {
        self.axis
    }

    pub fn get_style(&self) -> IterStyle {
        self.style
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_style(mut self, style: IterStyle) -> Self {
        self.style = style;
        self
    }
}
