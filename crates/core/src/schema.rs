//! The declarative option table.
//!
//! One row per option: file name, target field, declared default,
//! description (emitted as a comment by the writer), and an optional
//! unit-conversion scale factor. Row order here is the order options
//! appear in written defaults files, so new options should be added to
//! the section they belong to, not appended.
//!
//! Scaled options hold working units in memory and natural physical
//! units on disk: linear camera offsets are millimeters in the file
//! and meters in memory, angular offsets degrees in the file and
//! radians in memory. The declared defaults are the in-memory values
//! and are never scaled.

use crate::registry::{FieldSlot, OptionDescriptor, OptionValue};

/// Millimeters on disk to meters in memory.
const MM_TO_M: f64 = 1.0 / 1000.0;
/// Degrees on disk to radians in memory.
const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Nominal Mars radius per the IAU 2000 standard, meters.
const MARS_RADIUS_M: f32 = 3_396_190.0;
/// ENVI header data-type code for 32-bit float rasters.
const ENVI_FLOAT32: i32 = 4;

macro_rules! option_table {
    (@scale) => {
        None
    };
    (@scale $s:expr) => {
        Some($s)
    };
    (@row int $name:literal, $($field:ident).+, $default:expr, $desc:expr $(, $scale:expr)?) => {
        OptionDescriptor {
            name: $name,
            slot: FieldSlot::Int(|b| &mut b.$($field).+),
            default: OptionValue::Int($default),
            description: $desc,
            scale: option_table!(@scale $($scale)?),
        }
    };
    (@row float $name:literal, $($field:ident).+, $default:expr, $desc:expr $(, $scale:expr)?) => {
        OptionDescriptor {
            name: $name,
            slot: FieldSlot::Float(|b| &mut b.$($field).+),
            default: OptionValue::Float($default),
            description: $desc,
            scale: option_table!(@scale $($scale)?),
        }
    };
    (@row double $name:literal, $($field:ident).+, $default:expr, $desc:expr $(, $scale:expr)?) => {
        OptionDescriptor {
            name: $name,
            slot: FieldSlot::Double(|b| &mut b.$($field).+),
            default: OptionValue::Double($default),
            description: $desc,
            scale: option_table!(@scale $($scale)?),
        }
    };
    ($( $kind:ident $name:literal => $($field:ident).+ , $default:expr , $desc:expr $(, scale $scale:expr)? ; )+) => {
        vec![ $( option_table!(@row $kind $name, $($field).+, $default, $desc $(, $scale)?) ),+ ]
    };
}

/// Build the full schema table, in defaults-file declaration order.
pub fn option_table() -> Vec<OptionDescriptor> {
    option_table![
        // Pipeline stage switches
        int "DO_ALIGNMENT" => tasks.do_alignment, 1, "Do we do alignment at all?";
        int "DO_KEYPOINT_ALIGNMENT" => tasks.keypoint_alignment, 1, "Align images using the keypoint alignment method";
        int "DO_EPHEMERIS_ALIGNMENT" => tasks.ephemeris_alignment, 0, "Align images using the ephemeris alignment method";
        int "DO_EPIPOLAR_ALIGNMENT" => tasks.epipolar_alignment, 0, "Align images using epipolar constraints";
        int "DO_FORMAT_IMG_SIZE" => tasks.format_size, 0, "format the size of the image";
        int "DO_SLOG" => tasks.slog, 0, "perform an slog (replace the emboss)";
        int "DO_LOG" => tasks.log, 0, "perform a log (laplacian of gaussian)";
        int "DO_FIRST_HIST_EQ" => tasks.eq_hist1, 0, "do the first histogram equalisation";
        int "DO_EMBOSS" => tasks.emboss, 0, "do the emboss convolution";
        int "DO_SECOND_HIST_EQ" => tasks.eq_hist2, 0, "do the second histogram equalisation";
        int "AUTO_SET_H_CORR_PARAM" => tasks.auto_set_corr_param, 0, "uses pyramidal scheme to autom get search param";
        int "DO_VERT_CAL" => tasks.vert_cal, 0, "do the vertical calibration";
        int "WRITE_TEXTURE" => tasks.w_texture, 0, "write the pgm texture file";
        int "WRITE_PREPROCESSED" => tasks.w_preprocessed, 0, "write the preprocessed image file";
        int "CORR_1ST_PASS" => tasks.corr_1st_pass, 1, "do the correlation";
        int "2D_CORRELATION" => tasks.bidim_corr, 1, "do a 2D correlation by default";
        int "CORR_CLEAN_UP" => tasks.corr_clean_up, 0, "do n filtering pass to rm wrong matches";
        int "WRITE_DEBUG_DISP" => tasks.w_debug_disp, 0, "write intermediate disp.pgm files";
        int "WRITE_DISP_STP" => tasks.w_disp_stp, 1, "write an stp file of the raw disp map";
        int "WRITE_DISP_PGM" => tasks.w_disp_pgm, 0, "write a pgm file of the raw disp map";
        int "WRITE_RAW_DISPARITIES" => tasks.w_raw_disparity_map, 0, "write raw unscaled disparity values";
        int "WRITE_PGM_DISPARITIES" => tasks.w_pgm_disparity_map, 0, "write a pgm file of disparity map unscaled";
        int "FILL_V_HOLES" => tasks.fill_v_holes, 0, "fill holes in dispmap with vert algorithm";
        int "FILL_H_HOLES" => tasks.fill_h_holes, 0, "fill holes in dispmap with horz algorithm";
        int "FILL_HOLES_NURBS" => tasks.fill_holes_nurbs, 0, "fill holes using the NURBS fitting code";
        int "EXTEND_DISP_LR" => tasks.extend_lr, 0, "extrapolate disp values (Left/Right)";
        int "EXTEND_DISP_TB" => tasks.extend_tb, 0, "extrapolate disp values (Top/Bottom)";
        int "SMOOTH_DISP" => tasks.smooth_disp, 0, "smooth the disp map";
        int "WRITE_FILTERED_DISP_PGM" => tasks.w_filtered_disp_pgm, 0, "write the filtered disp map in pgm";
        int "SMOOTH_RANGE" => tasks.smooth_range, 0, "do a smooth range on the range file";
        int "DO_DOTCLOUD" => tasks.dotcloud, 0, "build the dotcloud model";
        int "DO_LOCAL_LEVEL_TRANSFORM" => tasks.local_level_transform, 0, "coordinate transform: lander to local level to z-up, x-north frame";
        int "WRITE_DOTCLOUD" => tasks.w_dotcloud, 0, "write dotcloud file";
        int "WRITE_MVACS_RANGE" => tasks.w_vicar_range_maps, 0, "write range maps in mvacs vicar format";
        int "WRITE_VICAR_XYZ" => tasks.w_vicar_xyz_map, 0, "write xyz range map in vicar format";
        int "WRITE_DISP_VICAR" => tasks.w_disp_vicar, 0, "write disp map in vicar format";
        int "DO_ALTITUDE_TEXTURE" => tasks.alt_texture, 0, "create and write a texture f(altitude)";
        int "DO_3D_MESH" => tasks.mesh, 0, "do the mesh";
        int "ADAPTIVE_MESHING" => tasks.adaptive_meshing, 0, "do not do the adaptive meshing by dft";
        int "NFF_PLAIN" => tasks.nff_plain, 0, "save it as a plain model";
        int "NFF_TXT" => tasks.nff_txt, 0, "save it as a textured model";
        int "DOUBLE_SIDED" => tasks.double_sided, 0, "draw two sided polygons";
        int "INVENTOR" => tasks.inventor, 0, "save it as an Inventor file";
        int "VRML" => tasks.vrml, 0, "save it as an VRML file";
        int "WRITE_IVE" => tasks.write_ive, 1, "save it as an OpenSceneGraph file";
        int "WRITE_DEM" => tasks.write_dem, 0, "save it as a DEM file";
        int "APPLY_MASK" => tasks.apply_mask, 1, "apply the mask by default";
        int "WRITE_MASK" => tasks.w_mask, 0, "do not write the mask file by default";
        int "WRITE_EXTRAPOLATION_MASK" => tasks.w_extrapolation_mask, 0, "do not write the extrapolation mask";

        // Ephemeris alignment kernel
        double "EPHEM_ALIGN_KERNEL_X" => params.ephem_align_kernel_x, 150.0, "x coordinate of the ephem. alignmnt kernel";
        double "EPHEM_ALIGN_KERNEL_Y" => params.ephem_align_kernel_y, 150.0, "y coordinate of the ephem. alignmnt kernel";
        int "EPHEM_ALIGN_KERNEL_WIDTH" => params.ephem_align_kernel_width, 40, "Width of the ephemeris alignment kernel";
        int "EPHEM_ALIGN_KERNEL_HEIGHT" => params.ephem_align_kernel_height, 40, "Height of the ephemeris alignment kernel";

        // Correlation window geometry
        int "H_KERNEL" => params.h_kern, 0, "kernel width first pass";
        int "V_KERNEL" => params.v_kern, 0, "kernel height first pass";
        int "CORR_MARGIN" => params.corr_margin, 0, "extra margin for search window";
        int "H_CORR_MAX" => params.h_corr_max, 0, "correlation window size max x";
        int "H_CORR_MIN" => params.h_corr_min, 0, "correlation window size min x";
        int "CROP_X_MIN" => params.crop_x_min, 0, "cropping coordinate";
        int "CROP_X_MAX" => params.crop_x_max, 0, "";
        int "CROP_Y_MIN" => params.crop_y_min, 0, "";
        int "CROP_Y_MAX" => params.crop_y_max, 0, "";
        int "V_CORR_MIN" => params.v_corr_min, 0, "automatic img alignment parameters";
        int "V_CORR_MAX" => params.v_corr_max, 0, "min max vertical picture shift interval";
        int "AUTO_SET_V_CORR_PARAM" => params.auto_set_v_corr_param, 0, "goes with AUTO_SET_H_CORR_PARAM";

        // Camera geometry
        int "USE_CAHV" => params.use_cahv, 0, "";
        float "BASELINE" => params.baseline, 0.0, "distance between the cameras", scale MM_TO_M;
        float "TILT_PIVOT_OFFSET" => params.tilt_pivot_offset, 0.0, "vert dist btwn optical axis and tilt axis", scale MM_TO_M;
        float "CAMERA_OFFSET" => params.camera_offset, 0.0, "horz dist btwn cam nodal pt and tilt axis", scale MM_TO_M;
        float "X_OFFSET" => params.x_pivot_offset, 0.0, "offset btw world origin and the hz pivot";
        float "Y_OFFSET" => params.y_pivot_offset, 0.0, "";
        float "Z_OFFSET" => params.z_pivot_offset, 0.0, "";
        float "R_TOE_IN_0" => params.toe_r, 0.0, "toe in for the right eye", scale MM_TO_M;
        float "L_TOE_IN_0" => params.toe_l, 0.0, "toe in for the left eye", scale MM_TO_M;
        float "H_THETA_R_PIXEL" => params.h_theta_rpixel, 0.0, "field of view per pixel", scale MM_TO_M;
        float "H_THETA_L_PIXEL" => params.h_theta_lpixel, 0.0, "", scale MM_TO_M;
        float "V_THETA_R_PIXEL" => params.v_theta_rpixel, 0.0, "", scale MM_TO_M;
        float "V_THETA_L_PIXEL" => params.v_theta_lpixel, 0.0, "", scale MM_TO_M;

        // Scene bounds
        int "OUT_WIDTH" => params.out_width, 0, "desired image output size";
        int "OUT_HEIGHT" => params.out_height, 0, "";
        float "NEAR_UNIVERSE_RADIUS" => params.near_universe_radius, 0.0, "radius of inner boundary of universe [m]";
        float "FAR_UNIVERSE_RADIUS" => params.far_universe_radius, 0.0, "radius of outer boundary of universe [m]";
        float "GROUND_PLANE_LEVEL" => params.ground_plane, -1.0, "elevation of the ground plane [m]";
        float "SKY_BILLBOARD_ELEVATION" => params.sky_billboard_elevation, 3.0, "Angle (deg.) above which to place everything on billboard";
        int "SKY_BRIGHTNESS_THRESHOLD" => params.sky_brightness_threshold, 0, "Intensity above which to sky dot on billboard";

        // Disparity map clean-up and hole filling
        int "RM_H_HALF_KERN" => params.rm_h_half_kern, 0, "low conf pixel removal kernel half size";
        int "RM_V_HALF_KERN" => params.rm_v_half_kern, 0, "";
        int "RM_MIN_MATCHES" => params.rm_min_matches, 0, "min # of pxls to be matched to keep pxl";
        int "RM_TRESHOLD" => params.rm_threshold, 1, "RM_TRESHOLD > disp[n]-disp[m] pixels are not matching";
        float "SMR_TRESHOLD" => params.smr_threshold, 0.0, "threshold for the smooth range function";
        int "V_FILL_TRESHOLD" => params.v_fill_threshold, 0, "threshold for the vertical hole filling";
        int "H_FILL_TRESHOLD" => params.h_fill_threshold, 0, "threshold for the horizontal hole filling";

        // Model sampling and mosaics
        int "NFF_V_STEP" => params.nff_v_step, 10, "";
        int "NFF_H_STEP" => params.nff_h_step, 10, "";
        int "MOSAIC_V_STEP" => params.mosaic_v_step, 25, "";
        int "MOSAIC_H_STEP" => params.mosaic_h_step, 25, "";
        float "MOSAIC_SPHERE_CENTER_X" => params.mosaic_sphere_center_x, 0.0, "x coord of mosaic sphere center";
        float "MOSAIC_SPHERE_CENTER_Y" => params.mosaic_sphere_center_y, 0.0, "y coord of mosaic sphere center";
        float "MOSAIC_SPHERE_CENTER_Z" => params.mosaic_sphere_center_z, 0.0, "z coord of mosaic sphere center";
        int "DRAW_MOSAIC_GROUND_PLANE" => params.draw_mosaic_ground_plane, 0, "draw the ground plane for mosaics";
        int "MOSAIC_IGNORE_INTENSITY" => params.mosaic_ignore_intensity, 0, "ignore black pixels in mosaics";
        int "NFF_MAX_JUMP" => params.nff_max_jump, 0, "";
        int "NFF_2D_MAP" => params.nff_2d_map, 0, "";
        int "VERBOSE" => params.verbose, 1, "";

        // Pointing offsets
        float "PAN_OFFSET" => params.pan_offset, 0.0, "offset added to pan/tilt read in header", scale DEG_TO_RAD;
        float "TILT_OFFSET" => params.tilt_offset, 0.0, "", scale DEG_TO_RAD;

        // Altitude texturing
        float "ALTITUDE_RANGE" => params.altitude_range, 1.0, "for the altitude texturing";
        float "ALTITUDE_OFFSET" => params.altitude_offset, 0.0, "";
        int "ALTITUDE_MODE" => params.altitude_mode, 0, "0 limited 1 periodic";
        float "ALT_TOP_COLOR" => params.alt_top_color, 120.0, "";
        float "ALT_BOTTOM_COLOR" => params.alt_btm_color, 0.0, "";
        float "TEXTURE_CONTRAST" => params.texture_contrast, 1.0, "";

        // Disparity corrections and smoothing
        float "X_DISP_CORRECTION" => params.x_disp_corr, 0.0, "correct small/linear distortion";
        float "Y_DISP_CORRECTION" => params.y_disp_corr, 0.0, "in disparity map";
        float "DISP_CORR_OFFSET" => params.disp_corr_offset, 0.0, "";
        int "MOSAIC" => params.mosaic, 0, "mosaic'ing mode";
        int "SM_DISP_M" => params.smooth_disp_m, 19, "matrix size for disparity smoothing";
        int "SM_DISP_N" => params.smooth_disp_n, 19, "";

        // Disparity extrapolation
        int "EXTEND_DISP_L" => params.extend_l, 0, "# of pxl to extrapolate the disp map (L/R)";
        int "EXTEND_DISP_R" => params.extend_r, 0, "";
        int "EXTEND_DISP_T" => params.extend_t, 0, "";
        int "EXTEND_DISP_B" => params.extend_b, 0, "";
        int "OFFSET_DISP_T" => params.offset_t, 0, "extrapolated pixel offset";
        int "OFFSET_DISP_B" => params.offset_b, 0, "";

        // Lens corrections
        float "A2" => params.lens_corr2, 0.0, "";
        float "A1" => params.lens_corr1, 0.0, "";
        float "A0" => params.lens_corr0, 0.0, "";
        float "MODEL_SCALE" => params.range_scale, 1.0, "model scaling factor";

        // Lander instrument mounting
        float "IMP_AZ_OFFSET" => params.imp_az_offset, 0.0, "offset btwn 0 motor count & cam x axis";
        float "IMP_CAN_Z_OFFSET" => params.imp_can_z_offset, 0.0, "z offset btwn imp origin and el/az axis";
        float "X_IMP_OFFSET" => params.x_imp_offset, 0.0, "offset between imp and lander frame";
        float "Y_IMP_OFFSET" => params.y_imp_offset, 0.0, "";
        float "Z_IMP_OFFSET" => params.z_imp_offset, 0.0, "";

        // Local level frame rotation
        float "LOCAL_LEVEL_X" => params.local_level_x, 0.0, "quaternion for rotating terrain";
        float "LOCAL_LEVEL_Y" => params.local_level_y, 0.0, "into local level frame";
        float "LOCAL_LEVEL_Z" => params.local_level_z, 0.0, "";
        float "LOCAL_LEVEL_W" => params.local_level_w, 1.0, "";

        // Billboards
        int "FAR_FIELD_BILLBOARD" => params.billboard_on, 1, "put the far field pixel on a billboard";
        int "DO_SKY_BILLBOARD" => params.sky_billboard, 0, "place everything higher than a given elev. on billboard";

        float "OUT_MESH_SCALE" => params.out_mesh_scale, 1.0, "scale factor for the output mesh";
        float "SUB_PXL_TRESHOLD" => params.sub_pxl_threshold, 1.0, "set disp threshold limit for valid subpxl";
        float "MASK_LOW_CONTRAST_TRESHOLD" => params.mask_low_contrast_threshold, 1.0, "low contrast mask threshold value";

        // Image alignment
        int "H_TIE_PTS" => params.h_tie_pts, 10, "number of tie pt for image alignment";
        int "V_TIE_PTS" => params.v_tie_pts, 10, "";
        float "XCORR_TRESHOLD" => params.xcorr_threshold, 2.0, "";
        float "ALIGN.h11" => params.align.h11, 1.0, "homogeneous matrix for linear image align";
        float "ALIGN.h12" => params.align.h12, 0.0, "";
        float "ALIGN.h13" => params.align.h13, 0.0, "";
        float "ALIGN.h21" => params.align.h21, 0.0, "";
        float "ALIGN.h22" => params.align.h22, 1.0, "";
        float "ALIGN.h23" => params.align.h23, 0.0, "";
        float "ALIGN.h31" => params.align.h31, 0.0, "";
        float "ALIGN.h32" => params.align.h32, 0.0, "";
        float "ALIGN.h33" => params.align.h33, 1.0, "";

        // Image preprocessing
        float "RED_CHANEL_FACTOR" => params.red_factor, 1.0, "ppm images channel weight factor";
        float "GREEN_CHANEL_FACTOR" => params.green_factor, 1.0, "";
        float "BLUE_CHANEL_FACTOR" => params.blue_factor, 1.0, "";
        float "SLOG_KERNEL_WIDTH" => params.slog_kernel_width, 0.0, "";
        int "ALIGN_MARGIN_%_REJECT" => params.align_margin, 10, "percentage of tie pts to reject";
        int "REFERENCE_CAMERA" => params.ref_cam, 0, "use the right camera as a reference";
        int "MASTER_EYE" => params.ref_eye, 0, "use the right eye as a reference";

        // Texture casting
        int "TEXTURE_CASTING_TYPE" => params.texture_casting_type, 0, "0 = fit between Imax and Imin";
        int "MAX_GRAY_IN_TEXTURE" => params.max_gray_in_texture, 4095, "";
        int "MIN_GRAY_IN_TEXTURE" => params.min_gray_in_texture, 0, "";
        int "USE_MOTOR_COUNT" => params.use_motor_count, 0, "use the motor count instead of the MIPL value";

        // VRML / Inventor material
        float "AMBIENT_RED" => params.ambient_red, 0.2, "VRML / IV red ambient color";
        float "AMBIENT_GREEN" => params.ambient_green, 0.2, "VRML / IV green ambient color";
        float "AMBIENT_BLUE" => params.ambient_blue, 0.2, "VRML / IV blue ambient color";
        float "DIFFUSE_RED" => params.diffuse_red, 0.8, "VRML / IV red diffuse color";
        float "DIFFUSE_GREEN" => params.diffuse_green, 0.8, "VRML / IV green diffuse color";
        float "DIFFUSE_BLUE" => params.diffuse_blue, 0.8, "VRML / IV blue diffuse color";
        float "SPECULAR_RED" => params.specular_red, 0.0, "VRML / IV red specular color";
        float "SPECULAR_GREEN" => params.specular_green, 0.0, "VRML / IV green specular color";
        float "SPECULAR_BLUE" => params.specular_blue, 0.0, "VRML / IV blue specular color";
        float "EMISSIVE_RED" => params.emissive_red, 1.0, "VRML / IV red emissive color";
        float "EMISSIVE_GREEN" => params.emissive_green, 1.0, "VRML / IV green emissive color";
        float "EMISSIVE_BLUE" => params.emissive_blue, 1.0, "VRML / IV blue emissive color";
        float "SHININESS" => params.shininess, 0.2, "VRML / IV model shininess";
        float "TRANSPARENCY" => params.transparency, 0.0, "VRML / IV model transparency";
        float "CREASE_ANGLE" => params.crease_angle, 1.5, "VRML / IV crease angle";
        int "SHAPE_TYPE_SOLID" => params.shape_type_solid, 1, "VRML / IV back face culling";

        // Mesh output
        double "MESH_TOLERANCE" => params.mesh_tolerance, 0.001, "tolerance of mesh";
        int "MAX_TRIANGLES" => params.max_triangles, 500000, "maximum number of triangles in the mesh";
        int "WRITE_TEXTURE_SWITCH" => params.write_texture_switch, 0, "write the vrml texture switch by default T.rgb, S.rgb, M.rgb, A.rgb";

        // DEM output
        float "DEM_SPACING" => params.dem_spacing, 3.0, "The USGS standard is 3 arc secs or 30 meters";
        float "DEM_PLANET_RADIUS" => params.dem_planet_radius, MARS_RADIUS_M, "Nominal planet radius according to the IAU 2000 standard";
        int "ENVI_DEM_DATA_TYPE" => params.envi_dem_data_type, ENVI_FLOAT32, "";
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::OptionKind;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let table = option_table();
        let mut seen = HashSet::new();
        for d in &table {
            assert!(seen.insert(d.name), "duplicate schema name {}", d.name);
        }
    }

    #[test]
    fn test_full_option_count() {
        assert_eq!(option_table().len(), 187);
    }

    #[test]
    fn test_complete_schema_coverage() {
        let table = option_table();
        let names: HashSet<_> = table.iter().map(|d| d.name).collect();
        // One representative per section, including the sections most
        // recently filled in.
        for name in [
            "DO_ALIGNMENT",
            "WRITE_PGM_DISPARITIES",
            "WRITE_IVE",
            "MOSAIC_SPHERE_CENTER_X",
            "EXTEND_DISP_L",
            "OFFSET_DISP_B",
            "IMP_AZ_OFFSET",
            "LOCAL_LEVEL_W",
            "ALIGN.h11",
            "ALIGN.h33",
            "RED_CHANEL_FACTOR",
            "SLOG_KERNEL_WIDTH",
            "USE_MOTOR_COUNT",
            "SHININESS",
            "CREASE_ANGLE",
            "SHAPE_TYPE_SOLID",
            "WRITE_TEXTURE_SWITCH",
            "ENVI_DEM_DATA_TYPE",
        ] {
            assert!(names.contains(name), "schema is missing {name}");
        }
    }

    #[test]
    fn test_slot_and_default_kinds_agree() {
        for d in option_table() {
            assert_eq!(
                d.slot.kind(),
                d.default.kind(),
                "kind mismatch for {}",
                d.name
            );
        }
    }

    #[test]
    fn test_scaled_options_default_to_scaling_fixed_point() {
        // Scaling is skipped for defaulted options; the declared
        // defaults of scaled options must be invariant under the
        // factor anyway, or a written default would not round-trip.
        for d in option_table() {
            if d.scale.is_some() {
                match d.default {
                    OptionValue::Float(v) => assert_eq!(v, 0.0, "{}", d.name),
                    OptionValue::Double(v) => assert_eq!(v, 0.0, "{}", d.name),
                    OptionValue::Int(v) => assert_eq!(v, 0, "{}", d.name),
                }
            }
        }
    }

    #[test]
    fn test_all_kinds_present() {
        let kinds: Vec<_> = option_table().iter().map(|d| d.slot.kind()).collect();
        assert!(kinds.contains(&OptionKind::Int));
        assert!(kinds.contains(&OptionKind::Float));
        assert!(kinds.contains(&OptionKind::Double));
    }
}
