//! Mock features dataset: selection, assembly and format conversion.

use crate::catalog::Catalog;
use crate::config::FeaturesConfig;
use crate::selection::Selection;
use mock_core::{InferenceConfig, Library, MockData, MockError, MockTable};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Generator of mock features datasets.
///
/// The config is validated and the column selection resolved once, at
/// construction. Each call to [`Features::create_data`] draws a fresh dataset
/// from the owned RNG.
pub struct Features {
    num_rows: usize,
    library: Library,
    selection: Selection,
    inference: InferenceConfig,
    rng: StdRng,
}

impl Features {
    /// Display name of this mock type.
    pub const NAME: &'static str = "Features";

    /// Create a generator from a config.
    ///
    /// Fails on a negative row count or invalid inference thresholds.
    pub fn new(config: &FeaturesConfig) -> Result<Self, MockError> {
        config.validate()?;
        let num_rows = config.row_count()?;
        let selection = Selection::normalize(&config.flags, config.all_dtypes);
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        debug!(
            "Features: {} rows, library {}, {} columns",
            num_rows,
            config.library,
            selection.len()
        );

        Ok(Self {
            num_rows,
            library: config.library,
            selection,
            inference: config.inference.clone(),
            rng,
        })
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn library(&self) -> Library {
        self.library
    }

    /// Resolved column selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Generate a dataset using the owned RNG.
    pub fn create_data(&mut self) -> Result<MockData, MockError> {
        let Self {
            num_rows,
            library,
            selection,
            inference,
            rng,
        } = self;
        build(*num_rows, *library, selection, inference, rng)
    }

    /// Generate a dataset using a caller-provided RNG.
    pub fn create_data_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<MockData, MockError> {
        build(
            self.num_rows,
            self.library,
            &self.selection,
            &self.inference,
            rng,
        )
    }
}

fn build<R: Rng + ?Sized>(
    num_rows: usize,
    library: Library,
    selection: &Selection,
    inference: &InferenceConfig,
    rng: &mut R,
) -> Result<MockData, MockError> {
    let catalog = Catalog::generate(num_rows, rng);
    let table = assemble(catalog, selection)?;
    let data = handle_library(table, library, inference);

    info!(
        "Generated {} dataset: {} rows x {} columns",
        library,
        num_rows,
        selection.len()
    );
    Ok(data)
}

/// Keep the selected catalog columns, in catalog order, as a table.
///
/// Nullable integer and float columns are packed into nullable storage.
pub fn assemble(catalog: Catalog, selection: &Selection) -> Result<MockTable, MockError> {
    let num_rows = catalog.num_rows();
    MockTable::new(num_rows, catalog.into_columns(selection))
}

/// Convert an assembled table into the requested representation.
///
/// Structured output gets a semantic schema attached; raw output drops
/// labels, and nulls become `RawValue::Missing`.
pub fn handle_library(mut table: MockTable, library: Library, inference: &InferenceConfig) -> MockData {
    match library {
        Library::Numpy => MockData::Array(table.to_raw_array()),
        Library::Pandas => {
            table.init_schema(inference);
            MockData::Table(table)
        }
    }
}

/// Generate a features dataset in one call.
pub fn generate_features(config: &FeaturesConfig) -> Result<MockData, MockError> {
    Features::new(config)?.create_data()
}
