//! The in-memory parameter block for the stereo pipeline.
//!
//! `DefaultsBlock` is the destination of every option read from a
//! defaults file: `StereoParams` holds the typed value options,
//! `TaskFlags` the pipeline stage switches (integers, semantically
//! booleans). A freshly constructed block is all zeroes; declared
//! defaults are written by the option registry before any file is
//! parsed, so the block is never observed partially initialized.

/// Pipeline stage switches. Stored as integers to match the defaults
/// file representation (`0` / `1`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFlags {
    pub do_alignment: i32,
    pub keypoint_alignment: i32,
    pub ephemeris_alignment: i32,
    pub epipolar_alignment: i32,
    pub format_size: i32,
    pub slog: i32,
    pub log: i32,
    pub eq_hist1: i32,
    pub emboss: i32,
    pub eq_hist2: i32,
    pub auto_set_corr_param: i32,
    pub vert_cal: i32,
    pub w_texture: i32,
    pub w_preprocessed: i32,
    pub corr_1st_pass: i32,
    pub bidim_corr: i32,
    pub corr_clean_up: i32,
    pub w_debug_disp: i32,
    pub w_disp_stp: i32,
    pub w_disp_pgm: i32,
    pub w_raw_disparity_map: i32,
    pub w_pgm_disparity_map: i32,
    pub fill_v_holes: i32,
    pub fill_h_holes: i32,
    pub fill_holes_nurbs: i32,
    pub extend_lr: i32,
    pub extend_tb: i32,
    pub smooth_disp: i32,
    pub w_filtered_disp_pgm: i32,
    pub smooth_range: i32,
    pub dotcloud: i32,
    pub local_level_transform: i32,
    pub w_dotcloud: i32,
    pub w_vicar_range_maps: i32,
    pub w_vicar_xyz_map: i32,
    pub w_disp_vicar: i32,
    pub alt_texture: i32,
    pub mesh: i32,
    pub adaptive_meshing: i32,
    pub nff_plain: i32,
    pub nff_txt: i32,
    pub double_sided: i32,
    pub inventor: i32,
    pub vrml: i32,
    pub write_ive: i32,
    pub write_dem: i32,
    pub apply_mask: i32,
    pub w_mask: i32,
    pub w_extrapolation_mask: i32,
}

/// Homogeneous 3x3 matrix for linear image alignment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlignMatrix {
    pub h11: f32,
    pub h12: f32,
    pub h13: f32,
    pub h21: f32,
    pub h22: f32,
    pub h23: f32,
    pub h31: f32,
    pub h32: f32,
    pub h33: f32,
}

/// Typed value options: correlation geometry, camera model, disparity
/// filtering, meshing, texturing and model output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StereoParams {
    // Ephemeris alignment kernel
    pub ephem_align_kernel_x: f64,
    pub ephem_align_kernel_y: f64,
    pub ephem_align_kernel_width: i32,
    pub ephem_align_kernel_height: i32,

    // Correlation window geometry
    pub h_kern: i32,
    pub v_kern: i32,
    pub corr_margin: i32,
    pub h_corr_max: i32,
    pub h_corr_min: i32,
    pub crop_x_min: i32,
    pub crop_x_max: i32,
    pub crop_y_min: i32,
    pub crop_y_max: i32,
    pub v_corr_min: i32,
    pub v_corr_max: i32,
    pub auto_set_v_corr_param: i32,

    // Camera geometry. Linear offsets are held in meters in memory but
    // written in millimeters on disk; angular offsets are radians in
    // memory, degrees on disk.
    pub use_cahv: i32,
    pub baseline: f32,
    pub tilt_pivot_offset: f32,
    pub camera_offset: f32,
    pub x_pivot_offset: f32,
    pub y_pivot_offset: f32,
    pub z_pivot_offset: f32,
    pub toe_r: f32,
    pub toe_l: f32,
    pub h_theta_rpixel: f32,
    pub h_theta_lpixel: f32,
    pub v_theta_rpixel: f32,
    pub v_theta_lpixel: f32,
    pub pan_offset: f32,
    pub tilt_offset: f32,

    // Scene bounds
    pub out_width: i32,
    pub out_height: i32,
    pub near_universe_radius: f32,
    pub far_universe_radius: f32,
    pub ground_plane: f32,
    pub sky_billboard_elevation: f32,
    pub sky_brightness_threshold: i32,

    // Disparity map clean-up and hole filling
    pub rm_h_half_kern: i32,
    pub rm_v_half_kern: i32,
    pub rm_min_matches: i32,
    pub rm_threshold: i32,
    pub smr_threshold: f32,
    pub v_fill_threshold: i32,
    pub h_fill_threshold: i32,
    pub smooth_disp_m: i32,
    pub smooth_disp_n: i32,
    pub sub_pxl_threshold: f32,
    pub mask_low_contrast_threshold: f32,

    // Disparity extrapolation
    pub extend_l: i32,
    pub extend_r: i32,
    pub extend_t: i32,
    pub extend_b: i32,
    pub offset_t: i32,
    pub offset_b: i32,

    // Disparity corrections
    pub x_disp_corr: f32,
    pub y_disp_corr: f32,
    pub disp_corr_offset: f32,
    pub lens_corr2: f32,
    pub lens_corr1: f32,
    pub lens_corr0: f32,

    // Mosaic mode
    pub mosaic: i32,
    pub mosaic_v_step: i32,
    pub mosaic_h_step: i32,
    pub mosaic_sphere_center_x: f32,
    pub mosaic_sphere_center_y: f32,
    pub mosaic_sphere_center_z: f32,
    pub draw_mosaic_ground_plane: i32,
    pub mosaic_ignore_intensity: i32,

    // Lander instrument mounting
    pub imp_az_offset: f32,
    pub imp_can_z_offset: f32,
    pub x_imp_offset: f32,
    pub y_imp_offset: f32,
    pub z_imp_offset: f32,
    pub use_motor_count: i32,

    // Quaternion rotating terrain into the local level frame
    pub local_level_x: f32,
    pub local_level_y: f32,
    pub local_level_z: f32,
    pub local_level_w: f32,

    // Billboards
    pub billboard_on: i32,
    pub sky_billboard: i32,

    // Image preprocessing
    pub red_factor: f32,
    pub green_factor: f32,
    pub blue_factor: f32,
    pub slog_kernel_width: f32,

    // Image alignment
    pub h_tie_pts: i32,
    pub v_tie_pts: i32,
    pub align_margin: i32,
    pub xcorr_threshold: f32,
    pub align: AlignMatrix,
    pub ref_cam: i32,
    pub ref_eye: i32,

    // Model output
    pub nff_v_step: i32,
    pub nff_h_step: i32,
    pub nff_max_jump: i32,
    pub nff_2d_map: i32,
    pub range_scale: f32,
    pub out_mesh_scale: f32,
    pub mesh_tolerance: f64,
    pub max_triangles: i32,
    pub write_texture_switch: i32,

    // Altitude texturing
    pub altitude_range: f32,
    pub altitude_offset: f32,
    pub altitude_mode: i32,
    pub alt_top_color: f32,
    pub alt_btm_color: f32,
    pub texture_contrast: f32,
    pub texture_casting_type: i32,
    pub max_gray_in_texture: i32,
    pub min_gray_in_texture: i32,

    // VRML / Inventor material
    pub ambient_red: f32,
    pub ambient_green: f32,
    pub ambient_blue: f32,
    pub diffuse_red: f32,
    pub diffuse_green: f32,
    pub diffuse_blue: f32,
    pub specular_red: f32,
    pub specular_green: f32,
    pub specular_blue: f32,
    pub emissive_red: f32,
    pub emissive_green: f32,
    pub emissive_blue: f32,
    pub shininess: f32,
    pub transparency: f32,
    pub crease_angle: f32,
    pub shape_type_solid: i32,

    // DEM output
    pub dem_spacing: f32,
    pub dem_planet_radius: f32,
    pub envi_dem_data_type: i32,

    pub verbose: i32,
}

/// The full parameter block: value options plus stage switches.
///
/// Mutated only through an [`OptionRegistry`](crate::OptionRegistry);
/// one instance lives for the configuration phase of the process.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefaultsBlock {
    pub params: StereoParams,
    pub tasks: TaskFlags,
}
