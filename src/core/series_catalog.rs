//! Static lookup tables for every toolbox that appears in the benchmark
//! payloads: display label, line color, button CSS token and the layout of
//! the benchmark sources in the benchmarks repository.

/// Prefix shared by every source link when no page config overrides it.
pub const DEFAULT_SOURCE_BASE_URL: &str =
    "https://github.com/JuliaDynamics/JuliaDynamicsDocumentation.jl-benchmarks/blob/master/benchmarks-";

/// Where a toolbox keeps the source of one benchmark, relative to the base URL.
///
/// The formatted path is `<directory>/<prefix><stem><suffix>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkTemplate {
    pub directory: &'static str,
    pub prefix: &'static str,
    pub suffix: &'static str,
}

impl LinkTemplate {
    #[must_use]
    pub fn format(self, base_url: &str, file_stem: &str) -> String {
        format!(
            "{base_url}{}/{}{file_stem}{}",
            self.directory, self.prefix, self.suffix
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesMeta {
    pub display_name: &'static str,
    /// `#rrggbb` line and point color.
    pub color: &'static str,
    pub css_class: &'static str,
    pub link: LinkTemplate,
}

/// The closed set of series the catalog knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownSeries {
    QuantumOpticsJl,
    QuantumOpticsJlFft,
    Qutip,
    QutipCython,
    QuantumOpticsToolbox,
}

const QUANTUM_OPTICS_JL: SeriesMeta = SeriesMeta {
    display_name: "QO.jl",
    color: "#d66761",
    css_class: "qojl",
    link: LinkTemplate {
        directory: "QuantumOptics.jl",
        prefix: "",
        suffix: ".jl",
    },
};

const QUANTUM_OPTICS_JL_FFT: SeriesMeta = SeriesMeta {
    display_name: "QO.jl/fft",
    color: "#e8a39f",
    css_class: "qojlfft",
    link: LinkTemplate {
        directory: "QuantumOptics.jl",
        prefix: "",
        suffix: "_fft.jl",
    },
};

const QUTIP: SeriesMeta = SeriesMeta {
    display_name: "QuTiP",
    color: "#a87db6",
    css_class: "qutip",
    link: LinkTemplate {
        directory: "QuTiP",
        prefix: "",
        suffix: ".py",
    },
};

const QUTIP_CYTHON: SeriesMeta = SeriesMeta {
    display_name: "QuTiP/cython",
    color: "#666666",
    css_class: "qutipc",
    link: LinkTemplate {
        directory: "QuTiP",
        prefix: "",
        suffix: "_cython.py",
    },
};

const QUANTUM_OPTICS_TOOLBOX: SeriesMeta = SeriesMeta {
    display_name: "QO Toolbox",
    color: "#6cac5b",
    css_class: "qotb",
    link: LinkTemplate {
        directory: "QuantumOpticsToolbox",
        prefix: "bench_",
        suffix: ".m",
    },
};

impl KnownSeries {
    pub const ALL: [Self; 5] = [
        Self::QuantumOpticsJl,
        Self::QuantumOpticsJlFft,
        Self::Qutip,
        Self::QutipCython,
        Self::QuantumOpticsToolbox,
    ];

    /// Canonical id as it appears in a payload after identifier rewriting.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::QuantumOpticsJl => "QuantumOptics.jl",
            Self::QuantumOpticsJlFft => "QuantumOptics.jl/fft",
            Self::Qutip => "QuTiP",
            Self::QutipCython => "QuTiP/cython",
            Self::QuantumOpticsToolbox => "QuantumOpticsToolbox",
        }
    }

    #[must_use]
    pub const fn meta(self) -> &'static SeriesMeta {
        match self {
            Self::QuantumOpticsJl => &QUANTUM_OPTICS_JL,
            Self::QuantumOpticsJlFft => &QUANTUM_OPTICS_JL_FFT,
            Self::Qutip => &QUTIP,
            Self::QutipCython => &QUTIP_CYTHON,
            Self::QuantumOpticsToolbox => &QUANTUM_OPTICS_TOOLBOX,
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|series| series.id() == id)
    }
}

#[must_use]
pub fn meta_of(id: &str) -> Option<&'static SeriesMeta> {
    KnownSeries::from_id(id).map(KnownSeries::meta)
}

#[must_use]
pub fn color_of(id: &str) -> Option<&'static str> {
    meta_of(id).map(|meta| meta.color)
}

/// Human-readable label; unknown ids are returned unchanged.
#[must_use]
pub fn display_name_of(id: &str) -> &str {
    meta_of(id).map_or(id, |meta| meta.display_name)
}

#[must_use]
pub fn css_class_of(id: &str) -> Option<&'static str> {
    meta_of(id).map(|meta| meta.css_class)
}

#[must_use]
pub fn source_link_of(id: &str, file_stem: &str) -> Option<String> {
    source_link_with_base(DEFAULT_SOURCE_BASE_URL, id, file_stem)
}

#[must_use]
pub fn source_link_with_base(base_url: &str, id: &str, file_stem: &str) -> Option<String> {
    meta_of(id).map(|meta| meta.link.format(base_url, file_stem))
}
