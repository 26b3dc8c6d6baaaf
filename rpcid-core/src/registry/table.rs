//! Built-in capability table
//!
//! Bit positions are part of the projected bitmap format and must never be
//! reassigned; new capabilities are appended with the next free bit.

use super::RegistryEntry;

/// Well-known capabilities and their bit positions, in registry order
pub static BUILTIN_CAPABILITIES: &[RegistryEntry] = &[
    RegistryEntry::new("SystemCapability.Account.AppAccount", 0),
    RegistryEntry::new("SystemCapability.Account.OsAccount", 1),
    RegistryEntry::new("SystemCapability.Ability.AbilityBase", 2),
    RegistryEntry::new("SystemCapability.Ability.AbilityRuntime.AbilityCore", 3),
    RegistryEntry::new("SystemCapability.Ability.AbilityRuntime.Core", 4),
    RegistryEntry::new("SystemCapability.Ability.AbilityRuntime.FAModel", 5),
    RegistryEntry::new("SystemCapability.Ability.AbilityRuntime.Mission", 6),
    RegistryEntry::new("SystemCapability.Ability.AbilityTools.AbilityAssistant", 7),
    RegistryEntry::new("SystemCapability.Ability.DistributedAbilityManager", 8),
    RegistryEntry::new("SystemCapability.Ability.Form", 9),
    RegistryEntry::new("SystemCapability.AI.AiEngine", 10),
    RegistryEntry::new("SystemCapability.Applications.ContactsData", 11),
    RegistryEntry::new("SystemCapability.Applications.Contacts", 12),
    RegistryEntry::new("SystemCapability.Applications.settings.Core", 13),
    RegistryEntry::new("SystemCapability.ArkUI.ArkUI.Full", 14),
    RegistryEntry::new("SystemCapability.ArkUI.ArkUI.Lite", 15),
    RegistryEntry::new("SystemCapability.ArkUI.ArkUI.Napi", 16),
    RegistryEntry::new("SystemCapability.ArkUI.ArkUI.Libuv", 17),
    RegistryEntry::new("SystemCapability.Barrierfree.Accessibility.Core", 18),
    RegistryEntry::new("SystemCapability.BundleManager.BundleFramework", 19),
    RegistryEntry::new("SystemCapability.BundleManager.BundleTool", 20),
    RegistryEntry::new("SystemCapability.BundleManager.DistributedBundleFramework", 21),
    RegistryEntry::new("SystemCapability.BundleManager.PackageInstaller", 22),
    RegistryEntry::new("SystemCapability.BundleManager.Zlib", 23),
    RegistryEntry::new("SystemCapability.Communication.Bluetooth.Core", 24),
    RegistryEntry::new("SystemCapability.Communication.Bluetooth.Lite", 25),
    RegistryEntry::new("SystemCapability.Communication.NetManager.Core", 26),
    RegistryEntry::new("SystemCapability.Communication.NetManager.Extension", 27),
    RegistryEntry::new("SystemCapability.Communication.NetStack", 28),
    RegistryEntry::new("SystemCapability.Communication.NFC.Core", 29),
    RegistryEntry::new("SystemCapability.Communication.NFC.Tag", 30),
    RegistryEntry::new("SystemCapability.Communication.SoftBus.Core", 31),
    RegistryEntry::new("SystemCapability.Communication.IPC.Core", 32),
    RegistryEntry::new("SystemCapability.Communication.WiFi.Core", 33),
    RegistryEntry::new("SystemCapability.Communication.WiFi.STA", 34),
    RegistryEntry::new("SystemCapability.Communication.WiFi.AP.Core", 35),
    RegistryEntry::new("SystemCapability.Communication.WiFi.AP.Extension", 36),
    RegistryEntry::new("SystemCapability.Communication.WiFi.P2P", 37),
    RegistryEntry::new("SystemCapability.Communication.WiFi", 38),
    RegistryEntry::new("SystemCapability.Customization.ConfigPolicy", 39),
    RegistryEntry::new("SystemCapability.Customization.CustomConfig", 40),
    RegistryEntry::new("SystemCapability.Customization.EnterpriseDeviceManager", 41),
    RegistryEntry::new("SystemCapability.DistributedDataManager.DataObject.DistributedObject", 42),
    RegistryEntry::new("SystemCapability.DistributedDataManager.KVStore.Core", 43),
    RegistryEntry::new("SystemCapability.DistributedDataManager.KVStore.Lite", 44),
    RegistryEntry::new("SystemCapability.DistributedDataManager.KVStore.DistributedKVStore", 45),
    RegistryEntry::new("SystemCapability.DistributedDataManager.Preferences.Core", 46),
    RegistryEntry::new("SystemCapability.DistributedDataManager.RelationalStore.Core", 47),
    RegistryEntry::new("SystemCapability.DistributedDataManager.DataShare.Core", 48),
    RegistryEntry::new("SystemCapability.DistributedDataManager.DataShare.Consumer", 49),
    RegistryEntry::new("SystemCapability.DistributedDataManager.DataShare.Provider", 50),
    RegistryEntry::new("SystemCapability.DistributedHardware.DeviceManager", 51),
    RegistryEntry::new("SystemCapability.DistributedHardware.DistributedCamera", 52),
    RegistryEntry::new("SystemCapability.DistributedHardware.DistributedHardwareFWK", 53),
    RegistryEntry::new("SystemCapability.DistributedHardware.DistributedScreen", 54),
    RegistryEntry::new("SystemCapability.Developtools.Bytrace", 55),
    RegistryEntry::new("SystemCapability.FileManagement.FileManagerService", 56),
    RegistryEntry::new("SystemCapability.FileManagement.File.FileIO", 57),
    RegistryEntry::new("SystemCapability.FileManagement.File.Environment", 58),
    RegistryEntry::new("SystemCapability.FileManagement.File.DistributedFile", 59),
    RegistryEntry::new("SystemCapability.FileManagement.StorageService.Backup", 60),
    RegistryEntry::new("SystemCapability.FileManagement.StorageService.SpatialStatistics", 61),
    RegistryEntry::new("SystemCapability.FileManagement.StorageService.Volume", 62),
    RegistryEntry::new("SystemCapability.FileManagement.StorageService.Encryption", 63),
    RegistryEntry::new("SystemCapability.FileManagement.UserFileManager.Core", 64),
    RegistryEntry::new("SystemCapability.FileManagement.AppFileService", 65),
    RegistryEntry::new("SystemCapability.Global.I18n", 66),
    RegistryEntry::new("SystemCapability.Global.ResourceManager", 67),
    RegistryEntry::new("SystemCapability.Graphic.Graphic2D.EGL", 68),
    RegistryEntry::new("SystemCapability.Graphic.Graphic2D.GLES2", 69),
    RegistryEntry::new("SystemCapability.Graphic.Graphic2D.GLES3", 70),
    RegistryEntry::new("SystemCapability.Graphic.Graphic2D.NativeDrawing", 71),
    RegistryEntry::new("SystemCapability.Graphic.Graphic2D.NativeWindow", 72),
    RegistryEntry::new("SystemCapability.Graphic.Graphic2D.NativeBuffer", 73),
    RegistryEntry::new("SystemCapability.Graphic.Graphic2D.NativeImage", 74),
    RegistryEntry::new("SystemCapability.Graphic.Graphic2D.NativeVsync", 75),
    RegistryEntry::new("SystemCapability.Graphic.Graphic2D.WebGL", 76),
    RegistryEntry::new("SystemCapability.Graphic.Graphic2D.WebGL2", 77),
    RegistryEntry::new("SystemCapability.Graphic.Surface", 78),
    RegistryEntry::new("SystemCapability.Graphic.Vulkan", 79),
    RegistryEntry::new("SystemCapability.Graphic.UI", 80),
    RegistryEntry::new("SystemCapability.HiviewDFX.HiAppEvent", 81),
    RegistryEntry::new("SystemCapability.HiviewDFX.HiChecker", 82),
    RegistryEntry::new("SystemCapability.HiviewDFX.HiLog", 83),
    RegistryEntry::new("SystemCapability.HiviewDFX.HiLogLite", 84),
    RegistryEntry::new("SystemCapability.HiviewDFX.HiTrace", 85),
    RegistryEntry::new("SystemCapability.HiviewDFX.Hiview", 86),
    RegistryEntry::new("SystemCapability.HiviewDFX.Hiview.FaultLogger", 87),
    RegistryEntry::new("SystemCapability.HiviewDFX.Hiview.LogLibrary", 88),
    RegistryEntry::new("SystemCapability.HiviewDFX.HiviewLite", 89),
    RegistryEntry::new("SystemCapability.HiviewDFX.HiSysEvent", 90),
    RegistryEntry::new("SystemCapability.HiviewDFX.HiDumper", 91),
    RegistryEntry::new("SystemCapability.HiviewDFX.HiProfiler.HiDebug", 92),
    RegistryEntry::new("SystemCapability.HiviewDFX.HiEventLite", 93),
    RegistryEntry::new("SystemCapability.Location.Location.Core", 94),
    RegistryEntry::new("SystemCapability.Location.Location.Geocoder", 95),
    RegistryEntry::new("SystemCapability.Location.Location.Geofence", 96),
    RegistryEntry::new("SystemCapability.Location.Location.Gnss", 97),
    RegistryEntry::new("SystemCapability.Location.Location.Lite", 98),
    RegistryEntry::new("SystemCapability.Miscservices.Download", 99),
    RegistryEntry::new("SystemCapability.Miscservices.InputMethodFramework", 100),
    RegistryEntry::new("SystemCapability.Miscservices.Time", 101),
    RegistryEntry::new("SystemCapability.Miscservices.Upload", 102),
    RegistryEntry::new("SystemCapability.Miscservices.Wallpaper", 103),
    RegistryEntry::new("SystemCapability.Miscservices.ScreenLock", 104),
    RegistryEntry::new("SystemCapability.Miscservices.Pasteboard", 105),
    RegistryEntry::new("SystemCapability.MiscServices.Download", 106),
    RegistryEntry::new("SystemCapability.MiscServices.InputMethodFramework", 107),
    RegistryEntry::new("SystemCapability.MiscServices.Time", 108),
    RegistryEntry::new("SystemCapability.MiscServices.Upload", 109),
    RegistryEntry::new("SystemCapability.MiscServices.Wallpaper", 110),
    RegistryEntry::new("SystemCapability.MiscServices.ScreenLock", 111),
    RegistryEntry::new("SystemCapability.MiscServices.Pasteboard", 112),
    RegistryEntry::new("SystemCapability.MultimodalInput.Input.Core", 113),
    RegistryEntry::new("SystemCapability.MultimodalInput.Input.InputConsumer", 114),
    RegistryEntry::new("SystemCapability.MultimodalInput.Input.InputDevice", 115),
    RegistryEntry::new("SystemCapability.MultimodalInput.Input.InputMonitor", 116),
    RegistryEntry::new("SystemCapability.MultimodalInput.Input.InputSimulator", 117),
    RegistryEntry::new("SystemCapability.MultimodalInput.Input.Pointer", 118),
    RegistryEntry::new("SystemCapability.MultimodalInput.Input.RemoteInputDevice", 119),
    RegistryEntry::new("SystemCapability.MultimodalInput.Input.ShortKey", 120),
    RegistryEntry::new("SystemCapability.Msdp.DeviceStatus.Cooperate", 121),
    RegistryEntry::new("SystemCapability.Msdp.DeviceStatus.Stationary", 122),
    RegistryEntry::new("SystemCapability.Msdp.DeviceStatus.Drag", 123),
    RegistryEntry::new("SystemCapability.Multimedia.Audio.Capturer", 124),
    RegistryEntry::new("SystemCapability.Multimedia.Audio.Communication", 125),
    RegistryEntry::new("SystemCapability.Multimedia.Audio.Core", 126),
    RegistryEntry::new("SystemCapability.Multimedia.Audio.Device", 127),
    RegistryEntry::new("SystemCapability.Multimedia.Audio.Interrupt", 128),
    RegistryEntry::new("SystemCapability.Multimedia.Audio.Renderer", 129),
    RegistryEntry::new("SystemCapability.Multimedia.Audio.Tone", 130),
    RegistryEntry::new("SystemCapability.Multimedia.Audio.Volume", 131),
    RegistryEntry::new("SystemCapability.Multimedia.Camera.Core", 132),
    RegistryEntry::new("SystemCapability.Multimedia.Image.Core", 133),
    RegistryEntry::new("SystemCapability.Multimedia.Image.ImageCreator", 134),
    RegistryEntry::new("SystemCapability.Multimedia.Image.ImagePacker", 135),
    RegistryEntry::new("SystemCapability.Multimedia.Image.ImageReceiver", 136),
    RegistryEntry::new("SystemCapability.Multimedia.Image.ImageSource", 137),
    RegistryEntry::new("SystemCapability.Multimedia.Media.AudioPlayer", 138),
    RegistryEntry::new("SystemCapability.Multimedia.Media.AudioRecorder", 139),
    RegistryEntry::new("SystemCapability.Multimedia.Media.Core", 140),
    RegistryEntry::new("SystemCapability.Multimedia.Media.VideoPlayer", 141),
    RegistryEntry::new("SystemCapability.Multimedia.Media.VideoRecorder", 142),
    RegistryEntry::new("SystemCapability.Multimedia.Media.AudioDecoder", 143),
    RegistryEntry::new("SystemCapability.Multimedia.Media.AudioEncoder", 144),
    RegistryEntry::new("SystemCapability.Multimedia.Media.CodecBase", 145),
    RegistryEntry::new("SystemCapability.Multimedia.Media.Muxer", 146),
    RegistryEntry::new("SystemCapability.Multimedia.Media.Spliter", 147),
    RegistryEntry::new("SystemCapability.Multimedia.Media.VideoDecoder", 148),
    RegistryEntry::new("SystemCapability.Multimedia.Media.VideoEncoder", 149),
    RegistryEntry::new("SystemCapability.Multimedia.Media.AVPlayer", 150),
    RegistryEntry::new("SystemCapability.Multimedia.Media.AVRecorder", 151),
    RegistryEntry::new("SystemCapability.Multimedia.Media.AVScreenCapture", 152),
    RegistryEntry::new("SystemCapability.Multimedia.MediaLibrary.Core", 153),
    RegistryEntry::new("SystemCapability.Multimedia.MediaLibrary.DistributedCore", 154),
    RegistryEntry::new("SystemCapability.Multimedia.AVSession.Core", 155),
    RegistryEntry::new("SystemCapability.Multimedia.AVSession.Manager", 156),
    RegistryEntry::new("SystemCapability.Multimedia.SystemSound.Core", 157),
    RegistryEntry::new("SystemCapability.Notification.CommonEvent", 158),
    RegistryEntry::new("SystemCapability.Notification.Emitter", 159),
    RegistryEntry::new("SystemCapability.Notification.Notification", 160),
    RegistryEntry::new("SystemCapability.Notification.ReminderAgent", 161),
    RegistryEntry::new("SystemCapability.PowerManager.BatteryManager.Core", 162),
    RegistryEntry::new("SystemCapability.PowerManager.BatteryManager.Extension", 163),
    RegistryEntry::new("SystemCapability.PowerManager.BatteryManager.Lite", 164),
    RegistryEntry::new("SystemCapability.PowerManager.BatteryStatistics", 165),
    RegistryEntry::new("SystemCapability.PowerManager.DisplayPowerManager", 166),
    RegistryEntry::new("SystemCapability.PowerManager.PowerManager.Core", 167),
    RegistryEntry::new("SystemCapability.PowerManager.PowerManager.Extension", 168),
    RegistryEntry::new("SystemCapability.PowerManager.PowerManager.Lite", 169),
    RegistryEntry::new("SystemCapability.PowerManager.ThermalManager", 170),
    RegistryEntry::new("SystemCapability.PowerManager.DisplayPowerManager.Lite", 171),
    RegistryEntry::new("SystemCapability.ResourceSchedule.BackgroundTaskManager.ContinuousTask", 172),
    RegistryEntry::new("SystemCapability.ResourceSchedule.BackgroundTaskManager.TransientTask", 173),
    RegistryEntry::new("SystemCapability.ResourceSchedule.BackgroundTaskManager.EfficiencyResourcesApply", 174),
    RegistryEntry::new("SystemCapability.ResourceSchedule.UsageStatistics.App", 175),
    RegistryEntry::new("SystemCapability.ResourceSchedule.UsageStatistics.AppGroup", 176),
    RegistryEntry::new("SystemCapability.ResourceSchedule.WorkScheduler", 177),
    RegistryEntry::new("SystemCapability.Security.AccessToken", 178),
    RegistryEntry::new("SystemCapability.Security.AppVerify", 179),
    RegistryEntry::new("SystemCapability.Security.Cert", 180),
    RegistryEntry::new("SystemCapability.Security.CertificateManager", 181),
    RegistryEntry::new("SystemCapability.Security.CryptoFramework", 182),
    RegistryEntry::new("SystemCapability.Security.DataTransitManager", 183),
    RegistryEntry::new("SystemCapability.Security.DeviceAuth", 184),
    RegistryEntry::new("SystemCapability.Security.DeviceSecurityLevel", 185),
    RegistryEntry::new("SystemCapability.Security.Huks", 186),
    RegistryEntry::new("SystemCapability.Security.SecurityGuard", 187),
    RegistryEntry::new("SystemCapability.Sensors.MiscDevice", 188),
    RegistryEntry::new("SystemCapability.Sensors.MiscDevice.Lite", 189),
    RegistryEntry::new("SystemCapability.Sensors.Sensor", 190),
    RegistryEntry::new("SystemCapability.Sensors.Sensor.Lite", 191),
    RegistryEntry::new("SystemCapability.Startup.SystemInfo", 192),
    RegistryEntry::new("SystemCapability.Startup.SystemInfo.Lite", 193),
    RegistryEntry::new("SystemCapability.Telephony.CallManager", 194),
    RegistryEntry::new("SystemCapability.Telephony.CellularCall", 195),
    RegistryEntry::new("SystemCapability.Telephony.CellularData", 196),
    RegistryEntry::new("SystemCapability.Telephony.CoreService", 197),
    RegistryEntry::new("SystemCapability.Telephony.DataStorage", 198),
    RegistryEntry::new("SystemCapability.Telephony.SmsMms", 199),
    RegistryEntry::new("SystemCapability.Telephony.StateRegistry", 200),
    RegistryEntry::new("SystemCapability.Test.UiTest", 201),
    RegistryEntry::new("SystemCapability.Test.WuKong", 202),
    RegistryEntry::new("SystemCapability.Update.UpdateService", 203),
    RegistryEntry::new("SystemCapability.Update.DistributedUpgrade", 204),
    RegistryEntry::new("SystemCapability.USB.USBManager", 205),
    RegistryEntry::new("SystemCapability.UserIAM.UserAuth.Core", 206),
    RegistryEntry::new("SystemCapability.UserIAM.UserAuth.FaceAuth", 207),
    RegistryEntry::new("SystemCapability.UserIAM.UserAuth.FingerprintAuth", 208),
    RegistryEntry::new("SystemCapability.UserIAM.UserAuth.PinAuth", 209),
    RegistryEntry::new("SystemCapability.UserIAM.UserIdm", 210),
    RegistryEntry::new("SystemCapability.Utils.Lang", 211),
    RegistryEntry::new("SystemCapability.Web.Webview.Core", 212),
    RegistryEntry::new("SystemCapability.WindowManager.WindowManager.Core", 213),
    RegistryEntry::new("SystemCapability.WindowManager.WindowManager.MutiScreen", 214),
    RegistryEntry::new("SystemCapability.Cloud.AAID", 215),
    RegistryEntry::new("SystemCapability.Cloud.OAID", 216),
    RegistryEntry::new("SystemCapability.Cloud.VAID", 217),
    RegistryEntry::new("SystemCapability.DistributedBundleFramework", 218),
    RegistryEntry::new("SystemCapability.Ability.AbilityRuntime.QuickFix", 219),
    RegistryEntry::new("SystemCapability.Ability.DistributedAbilityManager.Continuation", 220),
    RegistryEntry::new("SystemCapability.Ability.Form.Provider", 221),
    RegistryEntry::new("SystemCapability.Ability.AbilityRuntime.Lite", 222),
    RegistryEntry::new("SystemCapability.XTS.DeviceAttest", 223),
    RegistryEntry::new("SystemCapability.XTS.DeviceAttestLite", 224),
    RegistryEntry::new("SystemCapability.Advertising.Ads", 225),
    RegistryEntry::new("SystemCapability.BundleManager.Overlay", 226),
    RegistryEntry::new("SystemCapability.Graphic.Graphic2D.ColorManager.Core", 227),
    RegistryEntry::new("SystemCapability.Graphic.Graphic2D.HyperGraphicManager", 228),
    RegistryEntry::new("SystemCapability.Security.Asset", 229),
    RegistryEntry::new("SystemCapability.Security.CodeSigning", 230),
    RegistryEntry::new("SystemCapability.Security.DlpPermissionService", 231),
    RegistryEntry::new("SystemCapability.Security.DlpCredentialService", 232),
    RegistryEntry::new("SystemCapability.ArkCompiler.JSVM", 233),
    RegistryEntry::new("SystemCapability.ArkUI.UiAppearance", 234),
    RegistryEntry::new("SystemCapability.Multimedia.Drm.Core", 235),
    RegistryEntry::new("SystemCapability.Multimedia.AudioHaptic.Core", 236),
    RegistryEntry::new("SystemCapability.Multimedia.Scan.Core", 237),
    RegistryEntry::new("SystemCapability.Print.PrintFramework", 238),
    RegistryEntry::new("SystemCapability.Communication.NetManager.Ethernet", 239),
    RegistryEntry::new("SystemCapability.Communication.NetManager.MDNS", 240),
    RegistryEntry::new("SystemCapability.Communication.NetManager.NetSharing", 241),
    RegistryEntry::new("SystemCapability.Communication.NetManager.Vpn", 242),
    RegistryEntry::new("SystemCapability.Communication.SecureElement", 243),
    RegistryEntry::new("SystemCapability.Communication.DistributedCommunication", 244),
    RegistryEntry::new("SystemCapability.Security.SecurityAudit", 245),
];
