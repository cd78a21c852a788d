//! Attribute projector: one live device handle in, a fully-populated
//! [DeviceInfo] out.
//!
//! Every vendor sub-query is tolerated to fail independently; a field whose
//! query fails keeps its documented default. Vendor firmware variation means
//! some attributes are legitimately absent on otherwise-functional devices,
//! so a partial record beats an all-or-nothing error.

use crate::{
    attributes::{AttributeId, ConfigurationId},
    backend::{DeviceConfiguration, DeviceHandle, ProfileAttributes},
    device_info::DeviceInfo,
    marshal,
};

/// Populate a record from a live device handle.
///
/// `index` is echoed into the record unchanged. Sub-interfaces acquired here
/// are dropped (released) before this returns.
pub(crate) fn project<D: DeviceHandle>(device: &D, index: i32) -> DeviceInfo {
    let mut info = DeviceInfo::with_index(index);

    if let Some(name) = device.display_name() {
        marshal::wide_to_c_buf(&name, &mut info.display_name);
    }
    if let Some(name) = device.model_name() {
        marshal::wide_to_c_buf(&name, &mut info.model_name);
    }

    if let Some(attrs) = device.profile_attributes() {
        if let Some(v) = attrs.get_int(AttributeId::PersistentId) {
            info.persistent_id = v;
        }
        if let Some(v) = attrs.get_int(AttributeId::DeviceGroupId) {
            info.device_group_id = v;
        }
        if let Some(v) = attrs.get_int(AttributeId::SubDeviceIndex) {
            info.sub_device_index = v as i32;
        }
        if let Some(v) = attrs.get_int(AttributeId::NumberOfSubDevices) {
            info.num_sub_devices = v as i32;
        }
        // Connection masks arrive as i64; only the low 32 bits carry flags.
        if let Some(v) = attrs.get_int(AttributeId::VideoInputConnections) {
            info.video_input_connections = v as u32;
        }
        if let Some(v) = attrs.get_int(AttributeId::VideoOutputConnections) {
            info.video_output_connections = v as u32;
        }
        if let Some(v) = attrs.get_int(AttributeId::AudioInputConnections) {
            info.audio_input_connections = v as u32;
        }
        if let Some(v) = attrs.get_int(AttributeId::AudioOutputConnections) {
            info.audio_output_connections = v as u32;
        }
        if let Some(v) = attrs.get_int(AttributeId::VideoIoSupport) {
            info.io_support = v as u32;
        }
        if let Some(v) = attrs.get_int(AttributeId::MaximumAudioChannels) {
            info.max_audio_channels = v as i32;
        }

        if let Some(v) = attrs.get_flag(AttributeId::SupportsInternalKeying) {
            info.supports_internal_keying = v;
        }
        if let Some(v) = attrs.get_flag(AttributeId::SupportsExternalKeying) {
            info.supports_external_keying = v;
        }
        if let Some(v) = attrs.get_flag(AttributeId::SupportsDualLinkSdi) {
            info.supports_dual_link_sdi = v;
        }
        if let Some(v) = attrs.get_flag(AttributeId::SupportsQuadLinkSdi) {
            info.supports_quad_link_sdi = v;
        }
        if let Some(v) = attrs.get_flag(AttributeId::SupportsIdleOutput) {
            info.supports_idle_output = v;
        }
    }

    if let Some(config) = device.configuration() {
        if let Some(label) = config.get_string(ConfigurationId::DeviceInformationLabel) {
            marshal::wide_to_c_buf(&label, &mut info.device_label);
        }
    }

    #[cfg(any(debug_assertions, feature = "strict_assertions"))]
    {
        assert_eq!(info.index, index);
        assert!(info.display_name.contains(&0));
        assert!(info.model_name.contains(&0));
        assert!(info.device_label.contains(&0));
    }

    info
}
