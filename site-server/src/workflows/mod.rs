//! 业务流程模块
//!
//! Each workflow is a set of plain functions over an injected
//! [`RecordStore`](crate::store::RecordStore): validation is pure and
//! returns a result, construction assigns the ID and initial status, and
//! persistence is a load-append-save (or load-modify-save) pass over the
//! whole collection.
//!
//! - [`booking`] - 餐桌预订提交
//! - [`preorder`] - 预点餐提交、数量调整、总价计算
//! - [`admin`] - 后台审核：列表与状态流转

pub mod admin;
pub mod booking;
pub mod preorder;
