use protosim_core::models::ProtocolStep;

/// CRISPR plasmid prep: extraction through colony verification.
pub fn crispr_plasmid_prep() -> Vec<ProtocolStep> {
    vec![
        ProtocolStep::new("DNA Extraction", 30.0, 5.0, 0.98, 5.0)
            .with_reagent("ethanol", 10.0)
            .with_reagent("buffers", 5.0),
        ProtocolStep::new("Plasmid Amplification", 120.0, 15.0, 0.95, 8.0)
            .with_reagent("pcr_mix", 50.0)
            .with_reagent("primers", 2.0),
        ProtocolStep::new("Restriction Digest", 60.0, 10.0, 0.96, 6.0)
            .with_reagent("restriction_enzyme", 5.0)
            .with_reagent("buffer", 10.0),
        ProtocolStep::new("Ligation", 45.0, 8.0, 0.92, 12.0)
            .with_reagent("ligase", 2.0)
            .with_reagent("atp", 1.0),
        ProtocolStep::new("Transformation", 30.0, 5.0, 0.88, 3.0)
            .with_reagent("competent_cells", 1.0)
            .with_reagent("recovery_media", 2.0),
        ProtocolStep::new("Colony Selection & Verification", 240.0, 30.0, 0.85, 10.0)
            .with_reagent("antibiotics", 20.0)
            .with_reagent("growth_media", 100.0),
    ]
}
