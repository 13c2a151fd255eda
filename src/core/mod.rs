pub mod point_mapper;
pub mod series_catalog;
pub mod types;

pub use point_mapper::{RawRecord, to_points};
pub use series_catalog::{
    DEFAULT_SOURCE_BASE_URL, KnownSeries, LinkTemplate, SeriesMeta, color_of, css_class_of,
    display_name_of, meta_of, source_link_of, source_link_with_base,
};
pub use types::{DataPoint, SeriesId};
