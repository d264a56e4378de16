//! Provider implementations, one per upstream source category

mod latest_release;
mod package_cache;
mod release_list;
mod vendor_feed;
mod version_manager;

pub use latest_release::{LatestReleaseProvider, adjust_for_vendor, ref_tag_name};
pub use package_cache::{PackageCacheProvider, extract_policy_version};
pub use release_list::{ReleaseListProvider, find_first_containing};
pub use vendor_feed::VendorFeedProvider;
pub use version_manager::VersionManagerProvider;
